//! ECDSA public-key recovery primitive.
//!
//! Given a signature `(r, s)` over a known message, the signer's public key
//! is `Q = r^-1 (s*R - z*G)` where `R` is the nonce commitment point,
//! reconstructed here from its x-coordinate `r` and a caller-supplied
//! y-parity bit.

use {
    super::{
        elliptic_curve::{EllipticCurve, EllipticCurvePoint},
        mod_ring::{ModRing, ModRingElement, UintMont},
        named_curves::{
            prime192v1, secp128r1, secp128r2, secp192k1, secp224k1, secp224r1, secp256k1,
            secp256r1, secp384r1, secp521r1, NamedCurve,
        },
        PublicKey,
    },
    anyhow::Result,
    num_traits::Inv,
    thiserror::Error,
};

/// Why a single recovery call produced no key.
#[derive(Clone, Debug, Error)]
pub enum RecoverError {
    /// The provider can not instantiate the requested curve. The caller
    /// should skip the curve and continue with other candidates.
    #[error("curve {0} is unavailable: {1}")]
    CurveUnavailable(NamedCurve, String),

    /// The signature is not valid or consistent under the given curve and
    /// digest. Local to one trial, never fatal.
    #[error("signature does not recover under {0}: {1}")]
    Unrecoverable(NamedCurve, &'static str),
}

/// Recovers the public key consistent with one signature under fixed
/// parameters.
///
/// `digest` is the already-hashed (or raw) message and `signature` the bare
/// `r || s` byte string, both halves sized to the curve's field. `y_is_odd`
/// selects which of the two nonce commitment points to use.
pub fn recover_public_key(
    curve: NamedCurve,
    digest: &[u8],
    signature: &[u8],
    y_is_odd: bool,
) -> Result<PublicKey, RecoverError> {
    match curve {
        NamedCurve::Secp128r1 => with_group(curve, secp128r1(), digest, signature, y_is_odd),
        NamedCurve::Secp128r2 => with_group(curve, secp128r2(), digest, signature, y_is_odd),
        NamedCurve::Secp192k1 => with_group(curve, secp192k1(), digest, signature, y_is_odd),
        NamedCurve::Prime192v1 => with_group(curve, prime192v1(), digest, signature, y_is_odd),
        NamedCurve::Secp224k1 => with_group(curve, secp224k1(), digest, signature, y_is_odd),
        NamedCurve::Secp224r1 => with_group(curve, secp224r1(), digest, signature, y_is_odd),
        NamedCurve::Secp256k1 => with_group(curve, secp256k1(), digest, signature, y_is_odd),
        NamedCurve::Secp256r1 => with_group(curve, secp256r1(), digest, signature, y_is_odd),
        NamedCurve::Secp384r1 => with_group(curve, secp384r1(), digest, signature, y_is_odd),
        NamedCurve::Secp521r1 => with_group(curve, secp521r1(), digest, signature, y_is_odd),
    }
}

fn with_group<U: UintMont>(
    curve: NamedCurve,
    group: Result<EllipticCurve<U>>,
    digest: &[u8],
    signature: &[u8],
    y_is_odd: bool,
) -> Result<PublicKey, RecoverError> {
    let group = group.map_err(|e| RecoverError::CurveUnavailable(curve, e.to_string()))?;
    recover_on(curve, &group, digest, signature, y_is_odd)
}

fn recover_on<U: UintMont>(
    curve: NamedCurve,
    group: &EllipticCurve<U>,
    digest: &[u8],
    signature: &[u8],
    y_is_odd: bool,
) -> Result<PublicKey, RecoverError> {
    let fail = |what| RecoverError::Unrecoverable(curve, what);
    let field_bytes = curve.field_bytes();
    if signature.len() != 2 * field_bytes {
        return Err(fail("signature length does not match the curve"));
    }
    let (r_bytes, s_bytes) = signature.split_at(field_bytes);
    let r = U::try_from_be_bytes(r_bytes).ok_or_else(|| fail("r out of range"))?;
    let s = U::try_from_be_bytes(s_bytes).ok_or_else(|| fail("s out of range"))?;

    let base = group.base_field();
    let scalar = group.scalar_field();
    let zero = U::from_u64(0);
    if r == zero || r >= scalar.modulus() || r >= base.modulus() {
        return Err(fail("r out of range"));
    }
    if s == zero || s >= scalar.modulus() {
        return Err(fail("s out of range"));
    }

    // z: leftmost order-length bytes of the digest, reduced into the scalar
    // field.
    let z = scalar_from_be_bytes(scalar, &digest[..digest.len().min(curve.order_bytes())]);
    let r_scalar = scalar.from_uint(r);
    let s_scalar = scalar.from_uint(s);
    let r_inv = r_scalar.inv().ok_or_else(|| fail("r not invertible"))?;

    // R: the point with x-coordinate r and the requested y parity.
    let r_point = group
        .from_x(base.from_uint(r))
        .ok_or_else(|| fail("r is not a valid x-coordinate"))?;
    let parity = r_point.y().map_or(false, ModRingElement::is_odd);
    let r_point = if parity == y_is_odd { r_point } else { -r_point };

    // Q = r^-1 (s*R - z*G)
    let q = (r_point * s_scalar - group.generator() * z) * r_inv;
    encode_uncompressed(&q, field_bytes).ok_or_else(|| fail("recovered the point at infinity"))
}

/// Big-endian bytes to scalar, reducing modulo the ring order.
fn scalar_from_be_bytes<'a, U: UintMont>(
    ring: &'a ModRing<U>,
    bytes: &[u8],
) -> ModRingElement<'a, U> {
    let radix = ring.from_u64(256);
    bytes
        .iter()
        .fold(ring.zero(), |acc, &byte| acc * radix + ring.from_u64(u64::from(byte)))
}

/// `0x04 || X || Y` with fixed-size big-endian coordinates, or None for the
/// point at infinity.
fn encode_uncompressed<U: UintMont>(
    point: &EllipticCurvePoint<'_, U>,
    field_bytes: usize,
) -> Option<PublicKey> {
    let (x, y) = (point.x()?, point.y()?);
    let mut bytes = Vec::with_capacity(1 + 2 * field_bytes);
    bytes.push(0x04);
    for coordinate in [x, y] {
        let be = coordinate.to_uint().be_bytes();
        bytes.extend_from_slice(&be[be.len() - field_bytes..]);
    }
    Some(PublicKey::new(bytes))
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    // First NTAG21x sample from the device profile table, known to be signed
    // over secp128r1 with no hash.
    const UID: [u8; 7] = hex!("04E10CDA993C80");
    const SIG: [u8; 32] = hex!("8B76052EE42F5567BEB53238B3E3F9950707C0DCC956B5C5EFCFDB709B2D82B3");
    const PK: [u8; 33] = hex!("04494E1A386D3D3CFE3DC10E5DE68A499B1C202DB5B132393E89ED19FE5BE8BC61");

    #[test]
    fn test_recover_known_key() {
        // One of the two parities yields the true key.
        let recovered: Vec<_> = [false, true]
            .iter()
            .filter_map(|&parity| {
                recover_public_key(NamedCurve::Secp128r1, &UID, &SIG, parity).ok()
            })
            .collect();
        assert!(recovered.iter().any(|pk| pk.as_ref() == PK));
    }

    #[test]
    fn test_recover_is_deterministic() {
        let a = recover_public_key(NamedCurve::Secp128r1, &UID, &SIG, false).ok();
        let b = recover_public_key(NamedCurve::Secp128r1, &UID, &SIG, false).ok();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let result = recover_public_key(NamedCurve::Secp256k1, &UID, &SIG, false);
        assert!(matches!(result, Err(RecoverError::Unrecoverable(..))));
    }

    #[test]
    fn test_rejects_out_of_range_scalars() {
        let sig = [0xff_u8; 32];
        let result = recover_public_key(NamedCurve::Secp128r1, &UID, &sig, false);
        assert!(matches!(result, Err(RecoverError::Unrecoverable(..))));
    }

    #[test]
    fn test_rejects_zero_r() {
        let sig = [0_u8; 32];
        let result = recover_public_key(NamedCurve::Secp128r1, &UID, &sig, false);
        assert!(matches!(result, Err(RecoverError::Unrecoverable(..))));
    }
}
