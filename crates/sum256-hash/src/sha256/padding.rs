//! Message padding (FIPS 180-4 Section 5.1.1).

#![forbid(unsafe_code)]

use sum256_core::{Error, Result};

use super::BLOCK_SIZE;

/// Largest message length whose bit count fits the 64-bit length field.
const MAX_MESSAGE_BYTES: u64 = u64::MAX / 8;

/// Pad a message to a whole number of 64-byte blocks.
///
/// Appends the 0x80 marker byte, zeros up to 8 bytes short of a block
/// boundary, then the original length in bits as a big-endian u64.
/// Returns a new owned buffer; the input is never aliased or mutated.
///
/// Fails with [`Error::InputTooLarge`] before any allocation if the bit
/// length cannot be represented; the length is never truncated or wrapped.
pub fn pad(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() as u64 > MAX_MESSAGE_BYTES {
        return Err(Error::InputTooLarge { bytes: data.len() });
    }
    let bit_len = (data.len() as u64) * 8;

    // 9 accounts for the marker byte and the 8 length bytes still to come;
    // lands exactly on 0 when the message already ends on the boundary.
    let zero_count = (BLOCK_SIZE - ((data.len() + 9) % BLOCK_SIZE)) % BLOCK_SIZE;

    let mut padded = Vec::with_capacity(data.len() + 9 + zero_count);
    padded.extend_from_slice(data);
    padded.push(0x80);
    padded.resize(padded.len() + zero_count, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    Ok(padded)
}
