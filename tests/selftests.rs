//! Runs every built-in device profile end to end and checks the recovered
//! key against the published vendor key.

use recover_pk::{
    crypto::{HashAlg, NamedCurve},
    fixtures::DEVICE_PROFILES,
    search::SearchParams,
};

fn verify_profile(name: &str) -> SearchParams {
    let profile = DEVICE_PROFILES
        .iter()
        .find(|profile| profile.name == name)
        .unwrap_or_else(|| panic!("unknown profile {name}"));
    profile.verify().unwrap()
}

#[test]
fn mifare_ultralight_ev1() {
    let params = verify_profile("Mifare Ultralight EV1");
    assert_eq!(params.curve, NamedCurve::Secp128r1);
    assert_eq!(params.hash, HashAlg::None);
}

#[test]
fn ntag21x() {
    let params = verify_profile("NTAG21x");
    assert_eq!(params.curve, NamedCurve::Secp128r1);
    assert_eq!(params.hash, HashAlg::None);
}

#[test]
fn mifare_classic_ev1() {
    let params = verify_profile("Mifare Classic EV1");
    assert_eq!(params.hash, HashAlg::None);
    assert!(matches!(
        params.curve,
        NamedCurve::Secp192k1 | NamedCurve::Prime192v1
    ));
}

#[test]
fn desfire_light() {
    verify_profile("DESFire Light");
}

#[test]
fn desfire_ev2() {
    verify_profile("DESFire EV2");
}

#[test]
fn desfire_ev2_xl() {
    verify_profile("DESFire EV2 XL");
}

#[test]
fn desfire_ev3() {
    verify_profile("DESFire EV3");
}

#[test]
fn mifare_plus_ev1() {
    verify_profile("Mifare Plus EV1");
}

#[test]
fn ntag413dna_desfire_ev1() {
    verify_profile("NTAG413DNA, DESFire EV1");
}

#[test]
fn ntag424dna() {
    verify_profile("NTAG424DNA");
}

#[test]
fn vivokey_spark1() {
    let params = verify_profile("Vivokey Spark1");
    assert_eq!(params.hash, HashAlg::Sha256);
}

#[test]
fn icode_dna_slix2() {
    verify_profile("ICODE DNA, ICODE SLIX2");
}

#[test]
fn mifare_plus_trojka() {
    verify_profile("MIFARE Plus Trojka");
}

#[test]
fn mifare_ultralight_aes() {
    verify_profile("MIFARE Ultralight AES");
}

#[test]
fn mifare_ultralight_aes_alt_key() {
    verify_profile("MIFARE Ultralight AES (alt key)");
}

#[test]
fn mifare_classic_ql88() {
    verify_profile("MIFARE Classic / QL88");
}

#[test]
fn ntag223dna_ntag224dna() {
    verify_profile("NTAG223DNA, NTAG224DNA");
}

#[test]
fn st25ta02kb() {
    verify_profile("ST25TA02KB TruST25 (ST) / KeyID 0x01");
}

#[test]
fn st25tn512_01k() {
    verify_profile("ST25TN512/01K TruST25 (ST) / KeyID 0x05");
}

#[test]
fn st25tv02kc() {
    verify_profile("ST25TV02KC TruST25 (ST) / KeyID 0x04");
}
