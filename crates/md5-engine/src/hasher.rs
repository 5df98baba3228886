//! The streaming `Md5` engine and its initialize/feed/finalize lifecycle.

use std::fmt;
use std::io::{self, IoSlice};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::buffer::BlockBuffer;
use crate::compress::compress_blocks;
use crate::consts::{DIGEST_LEN, INIT_STATE};
use crate::output::Md5Digest;
use crate::trace::trace_finalize;

/// Streaming MD5 hasher.
///
/// Construction initializes the accumulators, [`update`](Self::update) feeds
/// any number of chunks of any size, and [`finalize`](Self::finalize) consumes
/// the hasher and returns the digest. A finalized hasher cannot be fed again;
/// clone it first to take the digest of a prefix and keep going.
///
/// ```
/// use md5_engine::Md5;
///
/// let mut hasher = Md5::new();
/// hasher.update(b"ab");
/// let prefix = hasher.clone().finalize();
/// hasher.update(b"c");
///
/// assert_eq!(prefix.to_hex(), "187ef4436122d1cc2f40dc2b92f0eba0");
/// assert_eq!(hasher.finalize().to_hex(), "900150983cd24fb0d6963f7d28e17f72");
/// ```
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: BlockBuffer,
    /// Bytes fed so far, modulo 2^64.
    length: u64,
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md5")
            .field("bytes_processed", &self.length)
            .field("buffered", &self.buffer.filled())
            .finish_non_exhaustive()
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a hasher with the RFC 1321 initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INIT_STATE,
            buffer: BlockBuffer::new(),
            length: 0,
        }
    }

    /// Returns the hasher to its freshly constructed state.
    pub fn reset(&mut self) {
        #[cfg(feature = "zeroize")]
        self.zeroize();

        self.state = INIT_STATE;
        self.buffer.reset();
        self.length = 0;
    }

    /// Feeds additional bytes into the digest state.
    ///
    /// Feeding a message in several chunks yields the same digest as feeding
    /// it in one call. Empty input leaves the state untouched.
    pub fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);
        let state = &mut self.state;
        self.buffer.absorb(data, |blocks| compress_blocks(state, blocks));
    }

    /// Feeds each slice in order, as if they were concatenated.
    pub fn update_vectored(&mut self, slices: &[IoSlice<'_>]) {
        for slice in slices {
            self.update(slice);
        }
    }

    /// Total number of bytes fed since construction or the last reset.
    #[must_use]
    pub const fn bytes_processed(&self) -> u64 {
        self.length
    }

    /// Pads the message and returns the 128-bit MD5 output.
    #[must_use]
    pub fn finalize(mut self) -> Md5Digest {
        let state = &mut self.state;
        let padding_blocks = self
            .buffer
            .pad(self.length, |blocks| compress_blocks(state, blocks));
        trace_finalize(self.length, padding_blocks);

        let mut out = [0_u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(&self.state) {
            bytes.copy_from_slice(&word.to_le_bytes());
        }
        Md5Digest::from_bytes(out)
    }

    /// Finalizes into caller-provided storage.
    pub fn finalize_into(self, out: &mut [u8; DIGEST_LEN]) {
        *out = self.finalize().into_bytes();
    }

    /// Convenience helper that computes the MD5 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Md5Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl io::Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        self.update_vectored(bufs);
        Ok(bufs.iter().map(|buf| buf.len()).sum())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.update(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Md5 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.length.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Md5 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for Md5 {}
