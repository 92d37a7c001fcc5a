//! Curve candidates from signature length alone.

use {super::SearchError, crate::crypto::NamedCurve};

/// Maps a signature byte length to the curve families that produce
/// signatures of that size.
///
/// The low bit of the length is masked off because a signature may carry a
/// one-byte recovery-id prefix that is not part of the curve-sized payload.
/// The table is fixed; a length with no entry means no recovery is possible.
pub fn curve_candidates(signature_len: usize) -> Result<&'static [NamedCurve], SearchError> {
    use NamedCurve::{
        Prime192v1, Secp128r1, Secp128r2, Secp192k1, Secp224k1, Secp224r1, Secp256k1, Secp256r1,
        Secp384r1, Secp521r1,
    };
    Ok(match signature_len & !1 {
        32 => &[Secp128r1, Secp128r2],
        48 => &[Secp192k1, Prime192v1],
        56 => &[Secp224k1, Secp224r1],
        64 => &[Secp256k1, Secp256r1],
        96 => &[Secp384r1],
        132 => &[Secp521r1],
        _ => return Err(SearchError::UnsupportedSignatureSize(signature_len)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_table() {
        use NamedCurve::*;
        assert_eq!(curve_candidates(32).unwrap(), &[Secp128r1, Secp128r2]);
        assert_eq!(curve_candidates(48).unwrap(), &[Secp192k1, Prime192v1]);
        assert_eq!(curve_candidates(56).unwrap(), &[Secp224k1, Secp224r1]);
        assert_eq!(curve_candidates(64).unwrap(), &[Secp256k1, Secp256r1]);
        assert_eq!(curve_candidates(96).unwrap(), &[Secp384r1]);
        assert_eq!(curve_candidates(132).unwrap(), &[Secp521r1]);
    }

    #[test]
    fn test_recid_prefix_is_masked() {
        assert_eq!(curve_candidates(33).unwrap(), curve_candidates(32).unwrap());
        assert_eq!(curve_candidates(97).unwrap(), curve_candidates(96).unwrap());
    }

    #[test]
    fn test_unknown_length_fails() {
        for len in [0, 16, 31, 40, 128] {
            assert!(matches!(
                curve_candidates(len),
                Err(SearchError::UnsupportedSignatureSize(l)) if l == len
            ));
        }
    }
}
