//! Fingerprint and metadata types for the plagcheck perceptual layer.
//!
//! The fingerprint schema and metadata are part of the public contract: any
//! incompatible change must result in a new `perceptual_version`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Selected winnowed hash with its originating position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WinnowedShingle {
    /// Window hash value.
    pub hash: u64,
    /// Index of the window (and of its first token) in the window-hash stream.
    pub start_idx: usize,
}

/// Winnowed fingerprint of one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualFingerprint {
    /// Every k-token window hash, in window order. Empty when intermediates
    /// are disabled.
    pub shingles: Vec<u64>,
    /// Winnowed picks with their positions. Empty when intermediates are
    /// disabled.
    pub winnowed: Vec<WinnowedShingle>,
    /// The fingerprint set: distinct winnowed hash values.
    pub fingerprints: BTreeSet<u64>,
    /// How and with which configuration the fingerprint was produced.
    pub meta: PerceptualMeta,
}

impl PerceptualFingerprint {
    /// Jaccard similarity of two fingerprint sets.
    pub fn similarity(&self, other: &PerceptualFingerprint) -> f64 {
        crate::similarity::jaccard(&self.fingerprints, &other.fingerprints)
    }
}

/// Metadata for traceability and determinism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualMeta {
    /// Perceptual algorithm version owned by this crate.
    pub perceptual_version: u16,
    /// Human-readable algorithm identifier.
    pub algorithm_name: String,
    /// Hashed window length in tokens.
    pub k: usize,
    /// Winnowing window size.
    pub w: usize,
    /// Polynomial base.
    pub base: u64,
    /// Hash modulus.
    pub modulus: u64,
    /// Token hash seed.
    pub seed: u64,
    /// Configuration schema version supplied by the caller.
    pub config_version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> PerceptualMeta {
        PerceptualMeta {
            perceptual_version: 1,
            algorithm_name: "test".to_string(),
            k: 5,
            w: 4,
            base: 101,
            modulus: 1_000_000_007,
            seed: 42,
            config_version: 1,
        }
    }

    #[test]
    fn similarity_uses_fingerprint_sets() {
        let a = PerceptualFingerprint {
            shingles: vec![],
            winnowed: vec![],
            fingerprints: BTreeSet::from([1u64, 2, 3]),
            meta: meta(),
        };
        let b = PerceptualFingerprint {
            fingerprints: BTreeSet::from([2u64, 3, 4, 5]),
            ..a.clone()
        };
        assert!((a.similarity(&b) - 0.4).abs() < 1e-12);
        assert_eq!(a.similarity(&a), 1.0);
    }

    #[test]
    fn fingerprint_serde_roundtrip() {
        let fingerprint = PerceptualFingerprint {
            shingles: vec![10, 20, 30, 40],
            winnowed: vec![WinnowedShingle {
                hash: 10,
                start_idx: 0,
            }],
            fingerprints: BTreeSet::from([10u64]),
            meta: meta(),
        };

        let serialized = serde_json::to_string(&fingerprint).unwrap();
        let deserialized: PerceptualFingerprint = serde_json::from_str(&serialized).unwrap();
        assert_eq!(fingerprint, deserialized);
    }
}
