//! Compression round function (FIPS 180-4 Section 6.2.2 steps 2-3).

#![forbid(unsafe_code)]

/// Sigma0: rotr 2 ^ rotr 13 ^ rotr 22.
#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Sigma1: rotr 6 ^ rotr 11 ^ rotr 25.
#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Ch: each bit picks y or z depending on x.
#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj: bitwise majority of three words.
#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// One compression round: mix a round constant and schedule word into the
/// working state, returning the next state.
///
/// Applied 64 times per block, each call threading the previous call's
/// output. All additions wrap.
pub fn round(state: [u32; 8], k: u32, w: u32) -> [u32; 8] {
    let [a, b, c, d, e, f, g, h] = state;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    [
        t1.wrapping_add(t2),
        a,
        b,
        c,
        d.wrapping_add(t1),
        e,
        f,
        g,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_shifts_untouched_words_down() {
        let state = [1, 2, 3, 4, 5, 6, 7, 8];
        let next = round(state, 0x428a2f98, 0xdeadbeef);

        assert_eq!(&next[1..4], &state[0..3]);
        assert_eq!(&next[5..8], &state[4..7]);
    }

    #[test]
    fn test_ch_selects_by_first_argument() {
        assert_eq!(ch(u32::MAX, 0x12345678, 0x9abcdef0), 0x12345678);
        assert_eq!(ch(0, 0x12345678, 0x9abcdef0), 0x9abcdef0);
        assert_eq!(ch(0xffff0000, 0x12345678, 0x9abcdef0), 0x1234def0);
    }

    #[test]
    fn test_maj_takes_bitwise_majority() {
        assert_eq!(maj(0, 0, u32::MAX), 0);
        assert_eq!(maj(u32::MAX, u32::MAX, 0), u32::MAX);
        assert_eq!(maj(0b110, 0b101, 0b011), 0b111);
    }

    #[test]
    fn test_additions_wrap() {
        // All-ones state with max constant and word must not panic.
        let state = [u32::MAX; 8];
        let _ = round(state, u32::MAX, u32::MAX);
    }
}
