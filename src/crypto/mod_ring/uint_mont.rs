use {
    super::{ModRing, UintExp},
    ruint::{aliases::U64, Uint},
    std::fmt::Debug,
    subtle::{ConditionallySelectable, ConstantTimeEq},
};

/// Trait for Uint backends supporting Montgomery multiplication.
///
/// The only implemented backend is Ruint, but the code is cleaner
/// if we abstract this, otherwise we would have to pass along the
/// const-generic parameters everywhere.
pub trait UintMont:
    Sized
    + Copy
    + PartialEq
    + Eq
    + PartialOrd
    + Debug
    + ConstantTimeEq
    + ConditionallySelectable
    + UintExp
{
    fn parameters_from_modulus(modulus: Self) -> ModRing<Self>;
    fn from_u64(value: u64) -> Self;
    fn add_mod(self, other: Self, modulus: Self) -> Self;
    fn sub_mod(self, other: Self, modulus: Self) -> Self;
    fn mul_redc(self, other: Self, modulus: Self, mod_inv: u64) -> Self;
    fn inv_mod(self, modulus: Self) -> Option<Self>;

    /// Parses a big-endian byte string, if it fits the backend width.
    fn try_from_be_bytes(bytes: &[u8]) -> Option<Self>;

    /// Big-endian bytes, `ceil(BITS / 8)` long.
    fn be_bytes(self) -> Vec<u8>;

    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_sub(self, other: Self) -> Self;
    fn shr(self, amount: usize) -> Self;
    fn trailing_zeros(self) -> usize;
    fn bit(self, index: usize) -> bool;
}

impl<const BITS: usize, const LIMBS: usize> UintMont for Uint<BITS, LIMBS> {
    fn parameters_from_modulus(modulus: Self) -> ModRing<Self> {
        let mod_inv = U64::wrapping_from(modulus)
            .inv_ring()
            .expect("Modulus not an odd positive integer.")
            .wrapping_neg()
            .to();

        // montgomery_r2 = 2^(128 * LIMBS) mod modulus.
        let mut montgomery_r2 = Self::ZERO;
        if Self::BITS > 32 {
            montgomery_r2.set_bit(32 * Self::LIMBS, true);
        } else {
            montgomery_r2 = Self::from((1_u64 << 32) % modulus.to::<u64>());
        }
        montgomery_r2 = montgomery_r2.mul_mod(montgomery_r2, modulus);
        montgomery_r2 = montgomery_r2.mul_mod(montgomery_r2, modulus);
        ModRing::from_parameters(modulus, montgomery_r2, mod_inv)
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        Self::from(value)
    }

    #[inline]
    fn add_mod(self, other: Self, modulus: Self) -> Self {
        let (sum, carry) = self.overflowing_add(other);
        let (reduced, borrow) = sum.overflowing_sub(modulus);
        if carry | !borrow {
            reduced
        } else {
            sum
        }
    }

    #[inline]
    fn sub_mod(self, other: Self, modulus: Self) -> Self {
        let (result, borrow) = self.overflowing_sub(other);
        if borrow {
            result.wrapping_add(modulus)
        } else {
            result
        }
    }

    #[inline]
    fn mul_redc(self, other: Self, modulus: Self, mod_inv: u64) -> Self {
        Self::mul_redc(self, other, modulus, mod_inv)
    }

    #[inline]
    fn inv_mod(self, modulus: Self) -> Option<Self> {
        Self::inv_mod(self, modulus)
    }

    #[inline]
    fn try_from_be_bytes(bytes: &[u8]) -> Option<Self> {
        Self::try_from_be_slice(bytes)
    }

    #[inline]
    fn be_bytes(self) -> Vec<u8> {
        self.to_be_bytes_vec()
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self {
        Self::wrapping_add(self, other)
    }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self {
        Self::wrapping_sub(self, other)
    }

    #[inline]
    fn shr(self, amount: usize) -> Self {
        self >> amount
    }

    #[inline]
    fn trailing_zeros(self) -> usize {
        Self::trailing_zeros(&self)
    }

    #[inline]
    fn bit(self, index: usize) -> bool {
        Self::bit(&self, index)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ruint::{aliases::U256, uint},
    };

    #[test]
    fn test_m31_param() {
        type U32 = Uint<32, 1>;
        let modulus = uint!(2147483647_U32);
        let ring = U32::parameters_from_modulus(modulus);
        assert_eq!(ring.modulus(), modulus);
        assert_eq!(ring.mod_inv(), 4611686020574871553_u64);
        assert_eq!(ring.montgomery_r(), uint!(4_U32));
        assert_eq!(ring.montgomery_r3(), uint!(64_U32));
    }

    #[test]
    fn test_secp256k1_field_param() {
        let modulus = uint!(
            0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f_U256
        );
        let ring = U256::parameters_from_modulus(modulus);
        assert_eq!(ring.modulus(), modulus);
        // R = 2^256 mod p = 2^32 + 977
        assert_eq!(ring.montgomery_r(), uint!(0x1000003d1_U256));
    }

    #[test]
    fn test_be_bytes_roundtrip() {
        let value = uint!(0x04c1285a373080_U256);
        let bytes = value.be_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(U256::try_from_be_bytes(&bytes), Some(value));
        // Short slices zero-extend.
        assert_eq!(
            U256::try_from_be_bytes(&bytes[25..]),
            Some(value)
        );
    }
}
