//! Short code derivation from store-assigned identities.
//!
//! A code is the URL-safe base64 form (no padding) of the identity's
//! big-endian 8-byte representation. The mapping is a bijection between
//! positive `i64` values and 11-character codes, so uniqueness of codes
//! follows from uniqueness of identities and no collision check is needed.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Length of every code produced by [`encode`].
pub const CODE_LENGTH: usize = 11;

/// Encodes a positive identity into its short code.
///
/// Returns `None` for zero or negative ids: identities are assigned by the
/// store before encoding and are always positive.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_encoder::encode;
///
/// assert_eq!(encode(1).as_deref(), Some("AAAAAAAAAAE"));
/// assert_eq!(encode(0), None);
/// ```
pub fn encode(id: i64) -> Option<String> {
    if id <= 0 {
        return None;
    }

    Some(URL_SAFE_NO_PAD.encode(id.to_be_bytes()))
}

/// Decodes a short code back into its identity.
///
/// Trailing `=` padding is tolerated. Returns `None` for anything that is not
/// the encoding of a positive identity.
pub fn decode(code: &str) -> Option<i64> {
    let bytes = URL_SAFE_NO_PAD.decode(code.trim_end_matches('=')).ok()?;
    let bytes: [u8; 8] = bytes.try_into().ok()?;
    let id = i64::from_be_bytes(bytes);

    (id > 0).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(code: &str) -> bool {
        code.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode(1).unwrap(), "AAAAAAAAAAE");
        assert_eq!(encode(255).unwrap(), "AAAAAAAAAP8");
        assert_eq!(encode(1_000_000).unwrap(), "AAAAAAAPQkA");
        assert_eq!(encode(i64::MAX).unwrap(), "f_________8");
    }

    #[test]
    fn test_rejects_non_positive_ids() {
        assert!(encode(0).is_none());
        assert!(encode(-1).is_none());
        assert!(encode(i64::MIN).is_none());
    }

    #[test]
    fn test_injective_and_url_safe() {
        let mut seen = HashSet::new();

        for id in (1..=20_000).chain([i64::MAX - 1, i64::MAX, 1 << 40, (1 << 62) + 7]) {
            let code = encode(id).unwrap();

            assert_eq!(code.len(), CODE_LENGTH);
            assert!(is_url_safe(&code), "unsafe character in {code}");
            assert!(seen.insert(code), "duplicate code for id {id}");
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode(424_242), encode(424_242));
    }

    #[test]
    fn test_decode_reverses_encode() {
        for id in [1, 2, 63, 64, 4096, 123_456_789, i64::MAX] {
            let code = encode(id).unwrap();
            assert_eq!(decode(&code), Some(id));
        }
    }

    #[test]
    fn test_decode_tolerates_padding() {
        assert_eq!(decode("AAAAAAAAAP8="), Some(255));
    }

    #[test]
    fn test_decode_rejects_invalid_codes() {
        // wrong length, bad alphabet, zero and negative identities
        for code in ["", "abc", "AAAAAAAAAAAAAAA", "AAAA+AAAAAE", "AAAA/AAAAAE"] {
            assert_eq!(decode(code), None, "expected None for {code}");
        }
        assert_eq!(decode("AAAAAAAAAAA"), None);
        assert_eq!(decode("__________8"), None);
    }
}
