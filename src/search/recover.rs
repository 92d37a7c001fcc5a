//! Per-sample recovery attempts and multi-sample narrowing.

use {
    crate::crypto::{recover_public_key, HashAlg, NamedCurve, PublicKey, RecoverError},
    anyhow::Result,
    std::collections::BTreeSet,
    tracing::{debug, warn},
};

/// One message/signature pair believed signed by the searched-for key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Signed message, usually the tag UID.
    pub uid:       Vec<u8>,
    /// Raw signature, optionally prefixed with a one-byte recovery id.
    pub signature: Vec<u8>,
}

impl Sample {
    pub fn from_hex(uid: &str, signature: &str) -> Result<Self> {
        Ok(Self {
            uid:       hex::decode(uid)?,
            signature: hex::decode(signature)?,
        })
    }
}

/// Ordered set of candidate keys from one or more recovery attempts.
pub type KeySet = BTreeSet<PublicKey>;

/// Recovery id values for the implicit brute force (ECDSA convention).
const RECIDS: [u8; 2] = [27, 28];

/// All public keys consistent with one sample under fixed parameters.
///
/// An even-length signature has no recovery id, so both ids are brute
/// forced; both may succeed and yield distinct points, which only
/// multi-sample intersection can tell apart. An odd-length signature
/// carries an explicit recovery-id prefix and gets a single attempt.
/// Failed attempts contribute nothing; an unavailable curve empties the
/// whole set with a warning.
pub fn recover_candidates(sample: &Sample, curve: NamedCurve, hash: HashAlg) -> KeySet {
    let digest = hash.digest(&sample.uid);
    let mut attempts: Vec<(u8, &[u8])> = Vec::with_capacity(RECIDS.len());
    if sample.signature.len() % 2 == 1 {
        attempts.push((sample.signature[0], &sample.signature[1..]));
    } else {
        for recid in RECIDS {
            attempts.push((recid, sample.signature.as_slice()));
        }
    }

    let mut keys = KeySet::new();
    for (recid, payload) in attempts {
        if !RECIDS.contains(&recid) {
            continue;
        }
        let y_is_odd = (recid - 27) & 1 == 1;
        match recover_public_key(curve, &digest, payload, y_is_odd) {
            Ok(key) => {
                debug!(%curve, %hash, recid, "possible pk: {key}");
                keys.insert(key);
            }
            Err(RecoverError::CurveUnavailable(curve, reason)) => {
                warn!(%curve, "curve unavailable, skipping: {reason}");
                return KeySet::new();
            }
            Err(RecoverError::Unrecoverable(..)) => {}
        }
    }
    keys
}

/// Intersects candidate sets across samples sharing one private key.
///
/// Under the right curve and hash every per-sample set contains the true
/// key, while the spurious second point differs between unrelated messages,
/// so the intersection converges on the key. Under wrong parameters the
/// sets look independent and collapse to empty. Once the accumulator is
/// empty it can never grow again, so the reduction short-circuits.
pub fn reduce_samples(samples: &[Sample], curve: NamedCurve, hash: HashAlg) -> KeySet {
    let mut accumulator = KeySet::new();
    for (i, sample) in samples.iter().enumerate() {
        let keys = recover_candidates(sample, curve, hash);
        if i == 0 {
            accumulator = keys;
        } else {
            accumulator.retain(|key| keys.contains(key));
        }
        if accumulator.is_empty() {
            return accumulator;
        }
    }
    accumulator
}
