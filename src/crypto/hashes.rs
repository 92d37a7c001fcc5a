//! Digest choices a tag vendor may have applied before signing.

use {
    md5::Md5,
    sha1::Sha1,
    sha2::{Digest, Sha256, Sha512},
    std::fmt::{self, Display, Formatter},
};

/// Hash applied to the message before recovery, or [`HashAlg::None`] for
/// raw-message recovery.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum HashAlg {
    None,
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlg {
    /// All candidates, in the order they are searched.
    pub const ALL: [Self; 5] = [Self::None, Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Digests `message`, or returns it unchanged for [`HashAlg::None`].
    #[must_use]
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::None => message.to_vec(),
            Self::Md5 => Md5::digest(message).to_vec(),
            Self::Sha1 => Sha1::digest(message).to_vec(),
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
        }
    }
}

impl Display for HashAlg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    #[test]
    fn test_digest_lengths() {
        let message = b"abc";
        assert_eq!(HashAlg::None.digest(message), message);
        assert_eq!(HashAlg::Md5.digest(message).len(), 16);
        assert_eq!(HashAlg::Sha1.digest(message).len(), 20);
        assert_eq!(HashAlg::Sha256.digest(message).len(), 32);
        assert_eq!(HashAlg::Sha512.digest(message).len(), 64);
    }

    #[test]
    fn test_sha256_vector() {
        assert_eq!(
            HashAlg::Sha256.digest(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }
}
