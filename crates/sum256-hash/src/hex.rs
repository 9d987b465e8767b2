//! Hex rendering of digests.
//!
//! Presentation only; the digest itself is the eight-word value.

#![forbid(unsafe_code)]

/// Render an eight-word digest as 64 lowercase hex characters.
///
/// Each word prints as 8 zero-padded digits, most significant word first.
pub fn encode(digest: &[u32; 8]) -> String {
    digest.iter().map(|word| format!("{:08x}", word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_digest() {
        assert_eq!(encode(&[0u32; 8]), "0".repeat(64));
    }

    #[test]
    fn test_words_render_zero_padded_in_order() {
        let digest = [
            0x00000001, 0xba7816bf, 0x00000000, 0xffffffff,
            0x0a0b0c0d, 0x12345678, 0x9abcdef0, 0x5be0cd19,
        ];
        assert_eq!(
            encode(&digest),
            "00000001ba7816bf00000000ffffffff\
             0a0b0c0d123456789abcdef05be0cd19"
        );
    }

    #[test]
    fn test_output_is_lowercase_and_64_chars() {
        let encoded = encode(&[0xABCDEF01u32; 8]);
        assert_eq!(encoded.len(), 64);
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
