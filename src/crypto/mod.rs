//! Implements the required cryptography.
//!
//! The curve arithmetic is generic over [`ruint`] backends so that one
//! implementation covers every field size in the supported curve table.

pub mod ecdsa;
mod elliptic_curve;
pub mod hashes;
pub mod mod_ring;
pub mod named_curves;

pub use self::{
    ecdsa::{recover_public_key, RecoverError},
    elliptic_curve::{EllipticCurve, EllipticCurvePoint},
    hashes::HashAlg,
    named_curves::NamedCurve,
};
use {
    anyhow::Result,
    std::fmt::{self, Debug, Display, Formatter},
};

/// Opaque wrapper for uncompressed public-key points.
///
/// Holds `0x04 || X || Y` bytes; displays as lowercase hex. The ordering is
/// lexicographic on the bytes, used for deterministic result sets.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self(hex::decode(hex)?))
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}
