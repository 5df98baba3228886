//! The MD5 compression function.
//!
//! One call mixes a single 64-byte block into the four accumulator words:
//! four rounds of sixteen steps, each round with its own boolean function
//! (F, G, H, I), message-word schedule and rotation amounts. The working
//! registers are added back into the accumulators modulo 2^32.

use crate::consts::{BLOCK_LEN, K, SHIFTS};

#[inline(always)]
const fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
const fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Decodes the sixteen little-endian message words of `block`.
///
/// Assembled with shifts so the result does not depend on host byte order.
#[inline(always)]
fn load_words(block: &[u8; BLOCK_LEN]) -> [u32; 16] {
    let mut words = [0_u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from(bytes[0])
            | (u32::from(bytes[1]) << 8)
            | (u32::from(bytes[2]) << 16)
            | (u32::from(bytes[3]) << 24);
    }
    words
}

/// Mixes one block into `state`.
pub fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let words = load_words(block);
    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let round = step / 16;
        let (mix, index) = match round {
            0 => (f(b, c, d), step),
            1 => (g(b, c, d), (5 * step + 1) % 16),
            2 => (h(b, c, d), (3 * step + 5) % 16),
            _ => (i(b, c, d), (7 * step) % 16),
        };

        let rotated = a
            .wrapping_add(mix)
            .wrapping_add(K[step])
            .wrapping_add(words[index])
            .rotate_left(SHIFTS[round][step % 4]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Mixes every block of `blocks` into `state`, in order.
#[inline]
pub fn compress_blocks(state: &mut [u32; 4], blocks: &[[u8; BLOCK_LEN]]) {
    for block in blocks {
        compress(state, block);
    }
}
