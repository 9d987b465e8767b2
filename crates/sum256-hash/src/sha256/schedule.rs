//! Message schedule expansion (FIPS 180-4 Section 6.2.2 step 1).

#![forbid(unsafe_code)]

use super::BLOCK_SIZE;

/// sigma0: rotr 7 ^ rotr 18 ^ shr 3.
#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// sigma1: rotr 17 ^ rotr 19 ^ shr 10.
#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one 64-byte block into the 64-word schedule.
///
/// W[0..16] are the block's 4-byte groups decoded big-endian, byte by
/// byte, so the result is identical on any host. W[16..64] follow
/// W[i] = sigma1(W[i-2]) + W[i-7] + sigma0(W[i-15]) + W[i-16],
/// all additions wrapping.
pub fn expand(block: &[u8; BLOCK_SIZE]) -> [u32; 64] {
    let mut w = [0u32; 64];

    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 16..64 {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}
