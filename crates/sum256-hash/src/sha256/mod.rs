//! SHA-256 digest pipeline (FIPS 180-4).
//!
//! Data flows one way: raw bytes -> padded bytes -> 64-byte blocks ->
//! per-block schedule -> 64 compression rounds -> accumulated state ->
//! digest. Each stage lives in its own module.

#![forbid(unsafe_code)]

pub mod compress;
pub mod constants;
pub mod padding;
pub mod schedule;

use std::slice::ChunksExact;

use sum256_core::Result;

use compress::round;
use constants::{H, K};
use padding::pad;
use schedule::expand;

/// Block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes (256 bits).
pub const DIGEST_SIZE: usize = 32;

/// View a padded message as consecutive 64-byte blocks.
///
/// Blocks are non-overlapping, in message order, and cover the input
/// exactly once; the iterator is lazy and can be restarted by calling
/// again. The padder guarantees the length is a multiple of 64.
pub fn blocks(padded: &[u8]) -> ChunksExact<'_, u8> {
    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    padded.chunks_exact(BLOCK_SIZE)
}

/// Compute the SHA-256 digest of `data` as eight 32-bit words.
///
/// Blocks chain strictly in sequence: the accumulator after one block is
/// the input to the next. Within a block the 64 rounds run on a copy of
/// the accumulator, which is only fed forward once the rounds finish.
///
/// Fails only when the message is too large for its bit length to fit
/// the 64-bit field appended by padding; no partial digest is returned.
pub fn digest_words(data: &[u8]) -> Result<[u32; 8]> {
    let padded = pad(data)?;

    let mut state = H;
    for block in blocks(&padded) {
        let block: &[u8; BLOCK_SIZE] = block.try_into().expect("blocks are 64 bytes");
        let w = expand(block);

        let mut working = state;
        for i in 0..64 {
            working = round(working, K[i], w[i]);
        }

        for j in 0..8 {
            state[j] = state[j].wrapping_add(working[j]);
        }
    }

    Ok(state)
}

/// Compute the SHA-256 digest of `data` as 32 bytes, big-endian word order.
pub fn digest(data: &[u8]) -> Result<[u8; DIGEST_SIZE]> {
    let words = digest_words(data)?;

    let mut out = [0u8; DIGEST_SIZE];
    for (i, word) in words.iter().enumerate() {
        out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }
    Ok(out)
}
