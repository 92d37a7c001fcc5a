//! Recovers vendor public keys from originality signatures.
//!
//! NFC tags often ship with a vendor ECDSA signature over their UID, but the
//! curve, hash and signing key are rarely documented. Given a handful of
//! UID/signature pairs from the same product family, this crate enumerates
//! plausible curve and hash combinations, runs public-key recovery on each
//! sample and intersects the per-sample candidate sets. Under the true
//! parameters the intersection converges on the vendor key; under wrong ones
//! it collapses to empty.
//!
//! The curve arithmetic is self-contained so that the search covers curves
//! absent from mainstream crypto crates, such as secp128r1 and secp224k1.

pub mod crypto;
pub mod fixtures;
pub mod search;
