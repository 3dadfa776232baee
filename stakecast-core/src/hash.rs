//! Seed-string hashing.
//!
//! The widely-copied `h = (h << 5) - h + c` string hash with 32-bit signed
//! wraparound at every step. Kept bit-compatible with the JavaScript
//! rendition so already-issued predictions replay identically.

/// Hash an arbitrary string into a non-negative 32-bit seed.
///
/// The accumulator is updated per UTF-16 code unit, matching JavaScript's
/// `charCodeAt` iteration order. Total for all inputs; the empty string
/// hashes to 0.
pub fn hash_seed(input: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h
            .wrapping_shl(5)
            .wrapping_sub(h)
            .wrapping_add(i32::from(unit));
    }
    // abs(i32::MIN) overflows, unsigned_abs does not
    h.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_hashes_to_zero() {
        assert_eq!(hash_seed(""), 0);
    }

    #[test]
    fn test_known_values() {
        // h("a") = 97, h("ab") = 97*31 + 98 = 3105
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("ab"), 3105);
        assert_eq!(hash_seed("abc"), 3105 * 31 + 99);
    }

    #[test]
    fn test_stable_across_calls() {
        let a = hash_seed("clientseed-serverseed");
        let b = hash_seed("clientseed-serverseed");
        assert_eq!(a, b);
    }

    #[test]
    fn test_long_input_wraps_without_panic() {
        let long = "x".repeat(10_000);
        // only checking totality under wraparound
        let _ = hash_seed(&long);
    }

    #[test]
    fn test_single_character_change_changes_hash() {
        assert_ne!(hash_seed("abcdef"), hash_seed("abcdeg"));
        assert_ne!(hash_seed("abcdef"), hash_seed("bbcdef"));
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // "é" is a single UTF-16 unit (0xE9), so h = 233
        assert_eq!(hash_seed("é"), 233);
        // surrogate pairs contribute two units
        let emoji = "\u{1F600}";
        let mut h: i32 = 0;
        for unit in emoji.encode_utf16() {
            h = h
                .wrapping_shl(5)
                .wrapping_sub(h)
                .wrapping_add(i32::from(unit));
        }
        assert_eq!(hash_seed(emoji), h.unsigned_abs());
    }
}
