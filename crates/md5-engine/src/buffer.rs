//! Fixed-size block buffer with a fill pointer.
//!
//! Bytes that do not yet complete a 64-byte block wait here between `update`
//! calls. Complete blocks are handed to a caller-provided sink, either the
//! buffered block itself or a run of whole blocks borrowed straight from the
//! input, so no input is copied unless it has to wait.

use std::slice;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, LENGTH_OFFSET};

/// Marker byte that starts the MD5 padding.
const PAD_MARKER: u8 = 0x80;

#[derive(Clone)]
pub struct BlockBuffer {
    bytes: [u8; BLOCK_LEN],
    filled: usize,
}

impl BlockBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; BLOCK_LEN],
            filled: 0,
        }
    }

    /// Number of valid bytes waiting for the next block.
    pub const fn filled(&self) -> usize {
        self.filled
    }

    pub fn reset(&mut self) {
        self.bytes = [0; BLOCK_LEN];
        self.filled = 0;
    }

    /// Appends `data`, passing every completed block to `on_blocks`.
    ///
    /// Fewer than [`BLOCK_LEN`] bytes remain buffered afterwards.
    pub fn absorb(
        &mut self,
        mut data: &[u8],
        mut on_blocks: impl FnMut(&[[u8; BLOCK_LEN]]),
    ) {
        if self.filled > 0 {
            let take = (BLOCK_LEN - self.filled).min(data.len());
            self.bytes[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < BLOCK_LEN {
                return;
            }

            on_blocks(slice::from_ref(&self.bytes));
            self.filled = 0;
        }

        let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
        if !blocks.is_empty() {
            on_blocks(blocks);
        }

        self.bytes[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Writes the final padding for a message of `message_len` bytes.
    ///
    /// Emits one block when the marker and length fit behind the buffered
    /// bytes, two otherwise. Returns the number of blocks emitted. The buffer
    /// is empty afterwards but still holds padding bytes until reset.
    pub fn pad(
        &mut self,
        message_len: u64,
        mut on_blocks: impl FnMut(&[[u8; BLOCK_LEN]]),
    ) -> usize {
        let bit_len = message_len.wrapping_mul(8);
        let mut emitted = 0;

        self.bytes[self.filled] = PAD_MARKER;
        self.bytes[self.filled + 1..].fill(0);

        if self.filled >= LENGTH_OFFSET {
            on_blocks(slice::from_ref(&self.bytes));
            emitted += 1;
            self.bytes.fill(0);
        }

        self.bytes[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_le_bytes());
        on_blocks(slice::from_ref(&self.bytes));
        emitted += 1;

        self.filled = 0;
        emitted
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for BlockBuffer {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.filled.zeroize();
    }
}
