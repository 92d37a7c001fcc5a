//! The curve and hash search over signature samples.
//!
//! The search enumerates the full cross product of curve candidates and
//! hash candidates; there is no pruning beyond dropping empty results,
//! since curve and hash choices do not compose predictably. The brute
//! force over recovery id, hash and curve is the whole retry strategy.

pub mod candidates;
mod recover;

pub use self::{
    candidates::curve_candidates,
    recover::{recover_candidates, reduce_samples, KeySet, Sample},
};
use {
    crate::crypto::{HashAlg, NamedCurve, PublicKey},
    std::{
        collections::BTreeMap,
        fmt::{self, Display, Formatter},
    },
    thiserror::Error,
    tracing::debug,
};

/// Errors that abort a search before any trial runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The signature length maps to no known curve family, so no recovery
    /// is possible at all.
    #[error("unsupported signature size {0}")]
    UnsupportedSignatureSize(usize),

    /// The sample list was empty.
    #[error("at least one sample is required")]
    NoSamples,
}

/// One point of the search space.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SearchParams {
    pub curve: NamedCurve,
    pub hash:  HashAlg,
}

impl Display for SearchParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "curve={} hash={}", self.curve, self.hash)
    }
}

/// All non-empty results of a search, ordered for reproducibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    results: BTreeMap<SearchParams, KeySet>,
}

/// Interpretation of a finished search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Exactly one parameter combination survived with exactly one key.
    Unique {
        params: SearchParams,
        key:    &'a PublicKey,
    },
    /// Several combinations or keys remain; the caller must supply more
    /// samples or outside confirmation, never guess.
    Ambiguous,
    /// No combination yielded a key. Expected when the true curve is not in
    /// the candidate table or the data is corrupted.
    Exhausted,
}

impl SearchReport {
    #[must_use]
    pub const fn results(&self) -> &BTreeMap<SearchParams, KeySet> {
        &self.results
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome<'_> {
        if self.results.is_empty() {
            return Outcome::Exhausted;
        }
        if self.results.len() == 1 {
            let (params, keys) = self
                .results
                .iter()
                .next()
                .expect("non-empty by the check above");
            if keys.len() == 1 {
                return Outcome::Unique {
                    params: *params,
                    key:    keys.iter().next().expect("len checked"),
                };
            }
        }
        Outcome::Ambiguous
    }

    /// Parameter combinations whose result set contains `key`. Used to
    /// isolate the true combination when an expected key is known from the
    /// outside.
    #[must_use]
    pub fn combinations_with(&self, key: &PublicKey) -> Vec<SearchParams> {
        self.results
            .iter()
            .filter(|(_, keys)| keys.contains(key))
            .map(|(params, _)| *params)
            .collect()
    }
}

/// Runs the multi-sample reduction for every (curve, hash) combination and
/// keeps the non-empty outcomes.
#[must_use]
pub fn search(samples: &[Sample], curves: &[NamedCurve], hashes: &[HashAlg]) -> SearchReport {
    let mut results = BTreeMap::new();
    for &curve in curves {
        for &hash in hashes {
            let params = SearchParams { curve, hash };
            let keys = reduce_samples(samples, curve, hash);
            debug!(%params, candidates = keys.len(), "trial finished");
            if !keys.is_empty() {
                results.insert(params, keys);
            }
        }
    }
    SearchReport { results }
}

/// Like [`search`], with curve candidates inferred from the first sample's
/// signature length and the full hash candidate list.
pub fn search_auto(samples: &[Sample]) -> Result<SearchReport, SearchError> {
    let first = samples.first().ok_or(SearchError::NoSamples)?;
    let curves = curve_candidates(first.signature.len())?;
    Ok(search(samples, curves, &HashAlg::ALL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mifare_ultralight_ev1_samples() -> Vec<Sample> {
        vec![
            Sample::from_hex(
                "04C1285A373080",
                "CEA2EB0B3C95D0844A95B824A7553703B3702378033BF0987899DB70151A19E7",
            )
            .unwrap(),
            Sample::from_hex(
                "04C2285A373080",
                "A561506723D422D29ED9F93E60D20B9ED1E05CC1BF81DA19FE500CA0B81CC0ED",
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_search_auto_unique() {
        let report = search_auto(&mifare_ultralight_ev1_samples()).unwrap();
        match report.outcome() {
            Outcome::Unique { params, key } => {
                assert_eq!(params.curve, NamedCurve::Secp128r1);
                assert_eq!(params.hash, HashAlg::None);
                assert_eq!(
                    key.to_hex(),
                    "0490933bdcd6e99b4e255e3da55389a827564e11718e017292faf23226a96614b8"
                );
            }
            other => panic!("expected unique outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let samples = mifare_ultralight_ev1_samples();
        let first = search_auto(&samples).unwrap();
        let second = search_auto(&samples).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_samples() {
        assert_eq!(search_auto(&[]), Err(SearchError::NoSamples));
    }

    #[test]
    fn test_unsupported_signature_size() {
        let sample = Sample {
            uid:       vec![0x04],
            signature: vec![0; 40],
        };
        assert_eq!(
            search_auto(&[sample]),
            Err(SearchError::UnsupportedSignatureSize(40))
        );
    }

    #[test]
    fn test_empty_report_is_exhausted() {
        assert_eq!(SearchReport::default().outcome(), Outcome::Exhausted);
    }
}
