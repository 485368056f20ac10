//! # plagcheck Perceptual Similarity
//!
//! Overlap-based similarity between two token streams produced by the
//! `canonical` crate. Two metric families live here:
//!
//! 1.  **N-gram overlap**: each document is reduced to its set of contiguous
//!     word n-grams (word triples by default) and the two sets are compared
//!     with the Jaccard coefficient.
//!
//! 2.  **Winnowed fingerprints**: every window of `k` tokens is hashed with a
//!     polynomial hash over stable XXH3 token hashes, reduced modulo a prime.
//!     Winnowing then keeps the minimum hash of every `w` consecutive window
//!     hashes. The distinct picks form the fingerprint set, and two documents
//!     are compared by the Jaccard coefficient of their fingerprint sets.
//!
//! ## Contract
//!
//! - Only canonical tokens are consumed; no normalization happens here.
//! - Every function is a pure function of `(tokens, config)`: no I/O, no
//!   clock, no global state. Token hashing is seeded and identical across
//!   processes and machines.
//! - An empty set on either side gives similarity `0.0`.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{fingerprint_similarity, fingerprint_tokens, ngram_similarity, PerceptualConfig};
//!
//! let tokens = vec!["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"];
//! let config = PerceptualConfig::default();
//!
//! let fingerprint = fingerprint_tokens(&tokens, &config).unwrap();
//! assert_eq!(fingerprint.shingles.len(), 5);
//! assert!(!fingerprint.fingerprints.is_empty());
//!
//! assert_eq!(ngram_similarity(&tokens, &tokens, 3), 1.0);
//! assert_eq!(fingerprint_similarity(&tokens, &tokens, &config), 1.0);
//! ```
//!
pub mod config;
pub mod fingerprint;
mod shingles;
mod similarity;

pub use crate::config::{PerceptualConfig, PerceptualError};
pub use crate::fingerprint::{PerceptualFingerprint, PerceptualMeta, WinnowedShingle};
pub use crate::shingles::{make_ngrams, token_hash};
pub use crate::similarity::{fingerprint_set, fingerprint_similarity, jaccard, ngram_similarity};
use crate::shingles::{make_shingles_rolling, winnow_minq};

/// Current perceptual algorithm version for this crate.
pub const PERCEPTUAL_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const PERCEPTUAL_ALGORITHM: &str = "polyhash+winnow_v1";

/// Compute the full winnowed fingerprint of a token stream
/// (window hashes → winnowing → fingerprint set).
///
/// The `tokens` slice must contain canonical tokens in their original order.
/// Streams shorter than `k + w - 1` tokens yield an empty fingerprint set.
pub fn fingerprint_tokens<S>(
    tokens: &[S],
    cfg: &PerceptualConfig,
) -> Result<PerceptualFingerprint, PerceptualError>
where
    S: AsRef<str>,
{
    cfg.validate()?;
    if tokens.len() < cfg.k {
        return Err(PerceptualError::NotEnoughTokens {
            k: cfg.k,
            got: tokens.len(),
        });
    }

    let mut shingles = make_shingles_rolling(tokens, cfg.k, cfg.base, cfg.modulus, cfg.seed);
    let mut winnowed = winnow_minq(&shingles, cfg.w);
    let fingerprints = winnowed.iter().map(|picked| picked.hash).collect();

    if !cfg.include_intermediates {
        shingles.clear();
        winnowed.clear();
    }

    Ok(PerceptualFingerprint {
        shingles,
        winnowed,
        fingerprints,
        meta: PerceptualMeta {
            perceptual_version: PERCEPTUAL_VERSION,
            algorithm_name: PERCEPTUAL_ALGORITHM.to_string(),
            k: cfg.k,
            w: cfg.w,
            base: cfg.base,
            modulus: cfg.modulus,
            seed: cfg.seed,
            config_version: cfg.version,
        },
    })
}

/// N-gram similarity of two raw texts, tokenized with the default canonical
/// pipeline.
#[cfg(feature = "with_canonical")]
pub fn ngram_similarity_text(text1: &str, text2: &str, n: usize) -> f64 {
    let tokens1 = canonical::tokenize(text1);
    let tokens2 = canonical::tokenize(text2);
    ngram_similarity(&tokens1, &tokens2, n)
}

/// Fingerprint similarity of two raw texts with the default configuration.
#[cfg(feature = "with_canonical")]
pub fn fingerprint_similarity_text(text1: &str, text2: &str) -> f64 {
    let tokens1 = canonical::tokenize(text1);
    let tokens2 = canonical::tokenize(text2);
    fingerprint_similarity(&tokens1, &tokens2, &PerceptualConfig::default())
}
