//! Set-overlap similarity metrics.

use std::collections::BTreeSet;

use crate::config::PerceptualConfig;
use crate::shingles::{make_ngrams, make_shingles_rolling, winnow_minq};

/// Jaccard coefficient `|A ∩ B| / |A ∪ B|`.
///
/// Defined as `0.0` whenever either set is empty, including when both are.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Jaccard similarity of the word n-gram sets of two token sequences.
///
/// A sequence shorter than `n` has no n-grams, which yields `0.0`.
pub fn ngram_similarity<S: AsRef<str>>(tokens1: &[S], tokens2: &[S], n: usize) -> f64 {
    let grams1 = make_ngrams(tokens1, n);
    let grams2 = make_ngrams(tokens2, n);
    jaccard(&grams1, &grams2)
}

/// Winnowed fingerprint set of a token sequence: the distinct minimum window
/// hashes. Empty for sequences shorter than `cfg.k + cfg.w - 1` tokens.
pub fn fingerprint_set<S: AsRef<str>>(tokens: &[S], cfg: &PerceptualConfig) -> BTreeSet<u64> {
    let shingles = make_shingles_rolling(tokens, cfg.k, cfg.base, cfg.modulus, cfg.seed);
    winnow_minq(&shingles, cfg.w)
        .into_iter()
        .map(|picked| picked.hash)
        .collect()
}

/// Jaccard similarity of the winnowed fingerprint sets of two token
/// sequences.
///
/// Returns `0.0` immediately when either sequence has fewer than `cfg.k`
/// tokens.
pub fn fingerprint_similarity<S: AsRef<str>>(
    tokens1: &[S],
    tokens2: &[S],
    cfg: &PerceptualConfig,
) -> f64 {
    if tokens1.len() < cfg.k || tokens2.len() < cfg.k {
        return 0.0;
    }
    jaccard(&fingerprint_set(tokens1, cfg), &fingerprint_set(tokens2, cfg))
}
