use {
    super::{ModRing, UintExp, UintMont},
    num_traits::Inv,
    std::{
        fmt::{self, Formatter},
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    },
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

/// Element of a [`ModRing`], referencing its ring parameters.
#[derive(Clone, Copy)]
pub struct ModRingElement<'a, Uint: UintMont> {
    ring:  &'a ModRing<Uint>,
    value: Uint,
}

impl<'a, Uint: UintMont> ModRingElement<'a, Uint> {
    #[inline]
    #[must_use]
    pub const fn from_montgomery(ring: &'a ModRing<Uint>, value: Uint) -> Self {
        Self { ring, value }
    }

    #[inline]
    #[must_use]
    pub const fn ring(&self) -> &'a ModRing<Uint> {
        self.ring
    }

    #[inline]
    #[must_use]
    pub const fn as_montgomery(self) -> Uint {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn to_uint(self) -> Uint {
        self.ring.mont_mul(self.value, Uint::from_u64(1))
    }

    #[inline]
    #[must_use]
    pub fn square(mut self) -> Self {
        self.value = self.ring.mont_mul(self.value, self.value);
        self
    }

    /// Whether the canonical representative is odd.
    #[inline]
    #[must_use]
    pub fn is_odd(self) -> bool {
        self.to_uint().bit(0)
    }

    /// Small exponentiation.
    ///
    /// Run time may depend on the exponent, use [`Self::pow_ct`] if constant
    /// time or large exponents are required.
    #[inline]
    #[must_use]
    pub fn pow(self, exponent: usize) -> Self {
        match exponent {
            0 => self.ring.one(),
            1 => self,
            n if n % 2 == 0 => self.pow(n / 2).square(),
            n => self * self.pow(n / 2).square(),
        }
    }

    /// Constant-time exponentiation with arbitrary unsigned int exponent.
    #[must_use]
    pub fn pow_ct<U: UintExp>(self, exponent: U) -> Self {
        let mut result = self.ring.one();
        let mut power = self;
        // We use `bit_len` here as an optimization when B >> log_2 exponent.
        // However, this does result in leaking the number of leading zeros.
        for i in 0..exponent.bit_len() {
            let product = result * power;
            result.conditional_assign(&product, exponent.bit_ct(i));
            power *= power;
        }
        result
    }

    /// Modular square root, if one exists.
    ///
    /// Uses the exponentiation shortcut for moduli congruent 3 mod 4 and
    /// Tonelli-Shanks otherwise. The modulus is assumed to be prime.
    #[must_use]
    pub fn sqrt(self) -> Option<Self> {
        let ring = self.ring;
        let one = ring.one();
        if self == ring.zero() {
            return Some(self);
        }
        let modulus = ring.modulus();
        let uint_one = Uint::from_u64(1);

        // Euler's criterion rejects non-residues.
        let legendre_exp = modulus.wrapping_sub(uint_one).shr(1);
        if self.pow_ct(legendre_exp) != one {
            return None;
        }

        if modulus.bit(1) {
            // modulus = 3 mod 4: sqrt = self^((modulus + 1) / 4)
            let exponent = modulus.shr(2).wrapping_add(uint_one);
            return Some(self.pow_ct(exponent));
        }

        // Tonelli-Shanks. Factor modulus - 1 = q * 2^s with q odd.
        let modulus_minus_one = modulus.wrapping_sub(uint_one);
        let s = modulus_minus_one.trailing_zeros();
        let q = modulus_minus_one.shr(s);

        // Deterministic scan for a quadratic non-residue.
        let mut non_residue = ring.from_u64(2);
        while non_residue.pow_ct(legendre_exp) == one {
            non_residue = non_residue + one;
        }

        let mut m = s;
        let mut c = non_residue.pow_ct(q);
        let mut t = self.pow_ct(q);
        // (q + 1) / 2, with q odd
        let mut result = self.pow_ct(q.shr(1).wrapping_add(uint_one));
        while t != one {
            // Least i with t^(2^i) = 1.
            let mut i = 0;
            let mut t_pow = t;
            while t_pow != one {
                t_pow = t_pow.square();
                i += 1;
                if i == m {
                    return None;
                }
            }
            let mut b = c;
            for _ in 0..m - i - 1 {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = t * c;
            result = result * b;
        }
        Some(result)
    }
}

macro_rules! forward_fmt {
    ($($trait:path),+) => {
        $(
            impl<'a, Uint: UintMont + $trait> $trait for ModRingElement<'a, Uint> {
                fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                    let uint = self.to_uint();
                    <Uint as $trait>::fmt(&uint, f)
                }
            }
        )+
    };
}

forward_fmt!(fmt::Debug, fmt::Display, fmt::LowerHex, fmt::UpperHex);

impl<Uint: UintMont> PartialEq for ModRingElement<'_, Uint> {
    fn eq(&self, other: &Self) -> bool {
        assert_eq!(*self.ring, *other.ring);
        self.value.ct_eq(&other.value).into()
    }
}

impl<Uint: UintMont> Eq for ModRingElement<'_, Uint> {}

impl<Uint: UintMont> Add for ModRingElement<'_, Uint> {
    type Output = Self;

    #[inline(always)]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<Uint: UintMont> Sub for ModRingElement<'_, Uint> {
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<Uint: UintMont> Mul for ModRingElement<'_, Uint> {
    type Output = Self;

    #[inline(always)]
    fn mul(mut self, other: Self) -> Self {
        self *= other;
        self
    }
}

impl<Uint: UintMont> Neg for ModRingElement<'_, Uint> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.ring.zero() - self
    }
}

impl<Uint: UintMont> Inv for ModRingElement<'_, Uint> {
    type Output = Option<Self>;

    fn inv(self) -> Self::Output {
        let value = self.value.inv_mod(self.ring.modulus())?;
        let value = self.ring.mont_mul(value, self.ring.montgomery_r3());
        Some(self.ring.from_montgomery(value))
    }
}

impl<Uint: UintMont> Div for ModRingElement<'_, Uint> {
    type Output = Option<Self>;

    /// Division
    ///
    /// Run time may depend on the value of the divisor.
    #[inline(always)]
    fn div(self, other: Self) -> Option<Self> {
        assert_eq!(self.ring(), other.ring());
        other.inv().map(|inv| self * inv)
    }
}

impl<Uint: UintMont> AddAssign for ModRingElement<'_, Uint> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        assert_eq!(self.ring(), other.ring());
        self.value = self.value.add_mod(other.value, self.ring.modulus());
    }
}

impl<Uint: UintMont> SubAssign for ModRingElement<'_, Uint> {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        assert_eq!(self.ring(), other.ring());
        self.value = self.value.sub_mod(other.value, self.ring.modulus());
    }
}

impl<Uint: UintMont> MulAssign for ModRingElement<'_, Uint> {
    #[inline(always)]
    fn mul_assign(&mut self, other: Self) {
        assert_eq!(self.ring(), other.ring());
        self.value = self.ring.mont_mul(self.value, other.value);
    }
}

impl<Uint: UintMont> DivAssign for ModRingElement<'_, Uint> {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.div(rhs).expect("Division by non-invertible");
    }
}

impl<Uint: UintMont> ConditionallySelectable for ModRingElement<'_, Uint> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        assert_eq!(a.ring(), b.ring());
        let value = Uint::conditional_select(&a.value, &b.value, choice);
        a.ring.from_montgomery(value)
    }
}

impl<Uint: UintMont> ConstantTimeEq for ModRingElement<'_, Uint> {
    fn ct_eq(&self, other: &Self) -> Choice {
        assert_eq!(self.ring(), other.ring());
        self.value.ct_eq(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, ruint::aliases::U64};

    #[test]
    fn test_sqrt_3_mod_4() {
        // 23 = 3 mod 4
        let ring = ModRing::from_modulus(U64::from(23_u64));
        let mut residues = 0;
        for a in 1..23_u64 {
            let elem = ring.from_u64(a);
            if let Some(root) = elem.sqrt() {
                assert_eq!(root.square(), elem);
                residues += 1;
            }
        }
        assert_eq!(residues, 11);
    }

    #[test]
    fn test_sqrt_tonelli_shanks() {
        // 29 = 1 mod 4, exercises the general path
        let ring = ModRing::from_modulus(U64::from(29_u64));
        let mut residues = 0;
        for a in 1..29_u64 {
            let elem = ring.from_u64(a);
            if let Some(root) = elem.sqrt() {
                assert_eq!(root.square(), elem);
                residues += 1;
            }
        }
        assert_eq!(residues, 14);
    }

    #[test]
    fn test_sqrt_zero() {
        let ring = ModRing::from_modulus(U64::from(23_u64));
        assert_eq!(ring.zero().sqrt(), Some(ring.zero()));
    }

    #[test]
    fn test_inv() {
        let ring = ModRing::from_modulus(U64::from(1000003_u64));
        for a in 1..100_u64 {
            let elem = ring.from_u64(a);
            let inv = elem.inv().unwrap();
            assert_eq!(elem * inv, ring.one());
        }
    }
}
