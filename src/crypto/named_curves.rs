//! The fixed table of curves tag vendors are known to sign with.
//!
//! Parameters from SEC 2 (versions 1 and 2) and RFC 5114. `prime192v1` is
//! the X9.62 name for secp192r1 / NIST P-192 and is kept because tag
//! documentation uses it.

use {
    super::{elliptic_curve::EllipticCurve, mod_ring::UintMont},
    anyhow::Result,
    ruint::{
        aliases::{U128, U192, U256, U384},
        uint, Uint,
    },
    std::fmt::{self, Display, Formatter},
};

type U224 = Uint<224, 4>;
type U521 = Uint<521, 9>;

/// Identifier for a supported curve.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NamedCurve {
    Secp128r1,
    Secp128r2,
    Secp192k1,
    Prime192v1,
    Secp224k1,
    Secp224r1,
    Secp256k1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
}

impl NamedCurve {
    pub const ALL: [Self; 10] = [
        Self::Secp128r1,
        Self::Secp128r2,
        Self::Secp192k1,
        Self::Prime192v1,
        Self::Secp224k1,
        Self::Secp224r1,
        Self::Secp256k1,
        Self::Secp256r1,
        Self::Secp384r1,
        Self::Secp521r1,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Secp128r1 => "secp128r1",
            Self::Secp128r2 => "secp128r2",
            Self::Secp192k1 => "secp192k1",
            Self::Prime192v1 => "prime192v1",
            Self::Secp224k1 => "secp224k1",
            Self::Secp224r1 => "secp224r1",
            Self::Secp256k1 => "secp256k1",
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
        }
    }

    /// Byte length of a base field element. Coordinates and signature halves
    /// have this size.
    #[must_use]
    pub const fn field_bytes(self) -> usize {
        match self {
            Self::Secp128r1 | Self::Secp128r2 => 16,
            Self::Secp192k1 | Self::Prime192v1 => 24,
            Self::Secp224k1 | Self::Secp224r1 => 28,
            Self::Secp256k1 | Self::Secp256r1 => 32,
            Self::Secp384r1 => 48,
            Self::Secp521r1 => 66,
        }
    }

    /// Byte length of the group order. Message digests are truncated to this
    /// size before reduction.
    #[must_use]
    pub const fn order_bytes(self) -> usize {
        match self {
            // The secp224k1 order is 225 bits.
            Self::Secp224k1 => 29,
            other => other.field_bytes(),
        }
    }
}

impl Display for NamedCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a curve in short Weierstrass form.
struct CurveParams<U> {
    modulus:   U,
    param_a:   U,
    param_b:   U,
    generator: (U, U),
    order:     U,
    cofactor:  u64,
}

impl<U: UintMont> CurveParams<U> {
    fn build(&self) -> Result<EllipticCurve<U>> {
        EllipticCurve::new(
            self.modulus,
            self.param_a,
            self.param_b,
            self.generator.0,
            self.generator.1,
            self.order,
            U::from_u64(self.cofactor),
        )
    }
}

/// SEC 2 v1 128-bit Random ECP Group, secp128r1
const SECP128R1: CurveParams<U128> = uint!(CurveParams {
    modulus:   0xfffffffd_ffffffff_ffffffff_ffffffff_U128,
    param_a:   0xfffffffd_ffffffff_ffffffff_fffffffc_U128,
    param_b:   0xe87579c1_1079f43d_d824993c_2cee5ed3_U128,
    generator: (
        0x161ff752_8b899b2d_0c28607c_a52c5b86_U128,
        0xcf5ac839_5bafeb13_c02da292_dded7a83_U128,
    ),
    order:     0xfffffffe_00000000_75a30d1b_9038a115_U128,
    cofactor:  1,
});

/// SEC 2 v1 128-bit Random ECP Group, second curve, secp128r2
const SECP128R2: CurveParams<U128> = uint!(CurveParams {
    modulus:   0xfffffffd_ffffffff_ffffffff_ffffffff_U128,
    param_a:   0xd6031998_d1b3bbfe_bf59cc9b_bff9aee1_U128,
    param_b:   0x5eeefca3_80d02919_dc2c6558_bb6d8a5d_U128,
    generator: (
        0x7b6aa5d8_5e572983_e6fb32a7_cdebc140_U128,
        0x27b6916a_894d3aee_7106fe80_5fc34b44_U128,
    ),
    order:     0x3fffffff_7fffffff_be002472_0613b5a3_U128,
    cofactor:  4,
});

/// SEC 2 192-bit Koblitz ECP Group, secp192k1
const SECP192K1: CurveParams<U192> = uint!(CurveParams {
    modulus:   0xffffffff_ffffffff_ffffffff_ffffffff_fffffffe_ffffee37_U192,
    param_a:   0x00000000_00000000_00000000_00000000_00000000_00000000_U192,
    param_b:   0x00000000_00000000_00000000_00000000_00000000_00000003_U192,
    generator: (
        0xdb4ff10e_c057e9ae_26b07d02_80b7f434_1da5d1b1_eae06c7d_U192,
        0x9b2f2f6d_9c5628a7_844163d0_15be8634_4082aa88_d95e2f9d_U192,
    ),
    order:     0xffffffff_ffffffff_fffffffe_26f2fc17_0f69466a_74defd8d_U192,
    cofactor:  1,
});

/// RFC 5114 192-bit Random ECP Group, NIST P-192, X9.62 prime192v1
const PRIME192V1: CurveParams<U192> = uint!(CurveParams {
    modulus:   0xffffffff_ffffffff_ffffffff_fffffffe_ffffffff_ffffffff_U192,
    param_a:   0xffffffff_ffffffff_ffffffff_fffffffe_ffffffff_fffffffc_U192,
    param_b:   0x64210519_e59c80e7_0fa7e9ab_72243049_feb8deec_c146b9b1_U192,
    generator: (
        0x188da80e_b03090f6_7cbf20eb_43a18800_f4ff0afd_82ff1012_U192,
        0x07192b95_ffc8da78_631011ed_6b24cdd5_73f977a1_1e794811_U192,
    ),
    order:     0xffffffff_ffffffff_ffffffff_99def836_146bc9b1_b4d22831_U192,
    cofactor:  1,
});

/// SEC 2 224-bit Koblitz ECP Group, secp224k1.
/// The group order is 225 bits, hence the 256-bit backend.
const SECP224K1: CurveParams<U256> = uint!(CurveParams {
    modulus:   0xffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffe_ffffe56d_U256,
    param_a:   0x00000000_00000000_00000000_00000000_00000000_00000000_00000000_U256,
    param_b:   0x00000000_00000000_00000000_00000000_00000000_00000000_00000005_U256,
    generator: (
        0xa1455b33_4df099df_30fc28a1_69a467e9_e47075a9_0f7e650e_b6b7a45c_U256,
        0x7e089fed_7fba3442_82cafbd6_f7e319f7_c0b0bd59_e2ca4bdb_556d61a5_U256,
    ),
    order:     0x01_00000000_00000000_00000000_0001dce8_d2ec6184_caf0a971_769fb1f7_U256,
    cofactor:  1,
});

/// RFC 5114 224-bit Random ECP Group, NIST P-224, secp224r1
const SECP224R1: CurveParams<U224> = uint!(CurveParams {
    modulus:   0xffffffff_ffffffff_ffffffff_ffffffff_00000000_00000000_00000001_U224,
    param_a:   0xffffffff_ffffffff_ffffffff_fffffffe_ffffffff_ffffffff_fffffffe_U224,
    param_b:   0xb4050a85_0c04b3ab_f5413256_5044b0b7_d7bfd8ba_270b3943_2355ffb4_U224,
    generator: (
        0xb70e0cbd_6bb4bf7f_321390b9_4a03c1d3_56c21122_343280d6_115c1d21_U224,
        0xbd376388_b5f723fb_4c22dfe6_cd4375a0_5a074764_44d58199_85007e34_U224,
    ),
    order:     0xffffffff_ffffffff_ffffffff_ffff16a2_e0b8f03e_13dd2945_5c5c2a3d_U224,
    cofactor:  1,
});

/// SEC 2 256-bit Koblitz ECP Group, secp256k1
const SECP256K1: CurveParams<U256> = uint!(CurveParams {
    modulus:   0xffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffe_fffffc2f_U256,
    param_a:   0x00000000_00000000_00000000_00000000_00000000_00000000_00000000_00000000_U256,
    param_b:   0x00000000_00000000_00000000_00000000_00000000_00000000_00000000_00000007_U256,
    generator: (
        0x79be667e_f9dcbbac_55a06295_ce870b07_029bfcdb_2dce28d9_59f2815b_16f81798_U256,
        0x483ada77_26a3c465_5da4fbfc_0e1108a8_fd17b448_a6855419_9c47d08f_fb10d4b8_U256,
    ),
    order:     0xffffffff_ffffffff_ffffffff_fffffffe_baaedce6_af48a03b_bfd25e8c_d0364141_U256,
    cofactor:  1,
});

/// RFC 5114 256-bit Random ECP Group, NIST P-256, secp256r1
const SECP256R1: CurveParams<U256> = uint!(CurveParams {
    modulus:   0xffffffff_00000001_00000000_00000000_00000000_ffffffff_ffffffff_ffffffff_U256,
    param_a:   0xffffffff_00000001_00000000_00000000_00000000_ffffffff_ffffffff_fffffffc_U256,
    param_b:   0x5ac635d8_aa3a93e7_b3ebbd55_769886bc_651d06b0_cc53b0f6_3bce3c3e_27d2604b_U256,
    generator: (
        0x6b17d1f2_e12c4247_f8bce6e5_63a440f2_77037d81_2deb33a0_f4a13945_d898c296_U256,
        0x4fe342e2_fe1a7f9b_8ee7eb4a_7c0f9e16_2bce3357_6b315ece_cbb64068_37bf51f5_U256,
    ),
    order:     0xffffffff_00000000_ffffffff_ffffffff_bce6faad_a7179e84_f3b9cac2_fc632551_U256,
    cofactor:  1,
});

/// RFC 5114 384-bit Random ECP Group, NIST P-384, secp384r1
const SECP384R1: CurveParams<U384> = uint!(CurveParams {
    modulus: 0xffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffe_ffffffff_00000000_00000000_ffffffff_U384,
    param_a: 0xffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffe_ffffffff_00000000_00000000_fffffffc_U384,
    param_b: 0xb3312fa7_e23ee7e4_988e056b_e3f82d19_181d9c6e_fe814112_0314088f_5013875a_c656398d_8a2ed19d_2a85c8ed_d3ec2aef_U384,
    generator: (
        0xaa87ca22_be8b0537_8eb1c71e_f320ad74_6e1d3b62_8ba79b98_59f741e0_82542a38_5502f25d_bf55296c_3a545e38_72760ab7_U384,
        0x3617de4a_96262c6f_5d9e98bf_9292dc29_f8f41dbd_289a147c_e9da3113_b5f0b8c0_0a60b1ce_1d7e819d_7a431d7c_90ea0e5f_U384,
    ),
    order: 0xffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_c7634d81_f4372ddf_581a0db2_48b0a77a_ecec196a_ccc52973_U384,
    cofactor: 1,
});

/// RFC 5114 521-bit Random ECP Group, NIST P-521, secp521r1
const SECP521R1: CurveParams<U521> = uint!(CurveParams {
    modulus: 0x000001ff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_U521,
    param_a: 0x000001ff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffc_U521,
    param_b: 0x00000051_953eb961_8e1c9a1f_929a21a0_b68540ee_a2da725b_99b315f3_b8b48991_8ef109e1_56193951_ec7e937b_1652c0bd_3bb1bf07_3573df88_3d2c34f1_ef451fd4_6b503f00_U521,
    generator: (
        0x000000c6_858e06b7_0404e9cd_9e3ecb66_2395b442_9c648139_053fb521_f828af60_6b4d3dba_a14b5e77_efe75928_fe1dc127_a2ffa8de_3348b3c1_856a429b_f97e7e31_c2e5bd66_U521,
        0x00000118_39296a78_9a3bc004_5c8a5fb4_2c7d1bd9_98f54449_579b4468_17afbd17_273e662c_97ee7299_5ef42640_c550b901_3fad0761_353c7086_a272c240_88be9476_9fd16650_U521,
    ),
    order: 0x000001ff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_ffffffff_fffffffa_51868783_bf2f966b_7fcc0148_f709a5d0_3bb5c9b8_899c47ae_bb6fb71e_91386409_U521,
    cofactor: 1,
});

pub fn secp128r1() -> Result<EllipticCurve<U128>> {
    SECP128R1.build()
}

pub fn secp128r2() -> Result<EllipticCurve<U128>> {
    SECP128R2.build()
}

pub fn secp192k1() -> Result<EllipticCurve<U192>> {
    SECP192K1.build()
}

pub fn prime192v1() -> Result<EllipticCurve<U192>> {
    PRIME192V1.build()
}

pub fn secp224k1() -> Result<EllipticCurve<U256>> {
    SECP224K1.build()
}

pub fn secp224r1() -> Result<EllipticCurve<U224>> {
    SECP224R1.build()
}

pub fn secp256k1() -> Result<EllipticCurve<U256>> {
    SECP256K1.build()
}

pub fn secp256r1() -> Result<EllipticCurve<U256>> {
    SECP256R1.build()
}

pub fn secp384r1() -> Result<EllipticCurve<U384>> {
    SECP384R1.build()
}

pub fn secp521r1() -> Result<EllipticCurve<U521>> {
    SECP521R1.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_curves_build() {
        secp128r1().unwrap();
        secp128r2().unwrap();
        secp192k1().unwrap();
        prime192v1().unwrap();
        secp224k1().unwrap();
        secp224r1().unwrap();
        secp256k1().unwrap();
        secp256r1().unwrap();
        secp384r1().unwrap();
        secp521r1().unwrap();
    }

    #[test]
    fn test_field_sizes() {
        assert_eq!(NamedCurve::Secp128r1.field_bytes(), 16);
        assert_eq!(NamedCurve::Secp224k1.field_bytes(), 28);
        assert_eq!(NamedCurve::Secp224k1.order_bytes(), 29);
        assert_eq!(NamedCurve::Secp521r1.field_bytes(), 66);
        for curve in NamedCurve::ALL {
            assert!(curve.order_bytes() >= curve.field_bytes());
        }
    }
}
