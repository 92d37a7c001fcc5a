use super::{ModRingElement, UintMont};

/// Ring of integers modulo an odd prime.
///
/// Elements are kept in Montgomery form; all parameters required for
/// Montgomery multiplication are precomputed on construction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct ModRing<Uint: UintMont> {
    modulus: Uint,

    // Precomputed values for Montgomery multiplication.
    montgomery_r:  Uint, // R = 2^(64*LIMBS) mod modulus
    montgomery_r2: Uint, // R^2, or R in Montgomery form
    montgomery_r3: Uint, // R^3, or R^2 in Montgomery form
    mod_inv:       u64,  // -1 / modulus mod 2^64
}

impl<Uint: UintMont> ModRing<Uint> {
    pub fn from_parameters(modulus: Uint, montgomery_r2: Uint, mod_inv: u64) -> Self {
        let montgomery_r = Uint::mul_redc(montgomery_r2, Uint::from_u64(1), modulus, mod_inv);
        let montgomery_r3 = Uint::mul_redc(montgomery_r2, montgomery_r2, modulus, mod_inv);
        Self {
            modulus,
            montgomery_r,
            montgomery_r2,
            montgomery_r3,
            mod_inv,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_modulus(modulus: Uint) -> Self {
        Uint::parameters_from_modulus(modulus)
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> Uint {
        self.modulus
    }

    #[inline]
    #[must_use]
    pub const fn montgomery_r(&self) -> Uint {
        self.montgomery_r
    }

    #[inline]
    #[must_use]
    pub const fn montgomery_r3(&self) -> Uint {
        self.montgomery_r3
    }

    #[inline]
    #[must_use]
    pub const fn mod_inv(&self) -> u64 {
        self.mod_inv
    }

    #[inline]
    #[must_use]
    pub const fn from_montgomery(&self, value: Uint) -> ModRingElement<'_, Uint> {
        ModRingElement::from_montgomery(self, value)
    }

    /// Constructs an element from a reduced representative.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not smaller than the modulus.
    #[must_use]
    pub fn from_uint(&self, value: Uint) -> ModRingElement<'_, Uint> {
        assert!(value < self.modulus);
        let value = self.mont_mul(value, self.montgomery_r2);
        self.from_montgomery(value)
    }

    #[inline]
    #[must_use]
    pub fn from_u64(&self, value: u64) -> ModRingElement<'_, Uint> {
        self.from_uint(Uint::from_u64(value))
    }

    #[inline]
    #[must_use]
    pub fn zero(&self) -> ModRingElement<'_, Uint> {
        self.from_montgomery(Uint::from_u64(0))
    }

    #[inline]
    #[must_use]
    pub fn one(&self) -> ModRingElement<'_, Uint> {
        self.from_montgomery(self.montgomery_r)
    }

    /// Montgomery multiplication for the ring.
    #[inline]
    #[must_use]
    pub(super) fn mont_mul(&self, a: Uint, b: Uint) -> Uint {
        a.mul_redc(b, self.modulus, self.mod_inv)
    }
}
