//! Configuration and error types for plagcheck perceptual similarity.
//!
//! This module is free of any I/O or environment-dependent behavior so that
//! the perceptual metrics are a pure function of `(tokens, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for n-gram overlap and winnowed fingerprinting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerceptualConfig {
    /// Configuration schema version.
    ///
    /// Any algorithmic change that can affect fingerprints must bump this
    /// version.
    pub version: u32,
    /// Number of tokens per n-gram for the n-gram overlap metric.
    pub ngram_size: usize,
    /// Number of tokens per hashed window (k-shingling). Documents with fewer
    /// tokens than this have no fingerprint.
    pub k: usize,
    /// Winnowing window size, in window hashes.
    pub w: usize,
    /// Polynomial base of the window hash.
    pub base: u64,
    /// Modulus of the window hash. Every window hash is `< modulus`.
    pub modulus: u64,
    /// Seed for the per-token XXH3 hash.
    ///
    /// Fingerprints are only comparable when produced with the same seed.
    pub seed: u64,
    /// Keep the full window-hash stream and the winnowed picks in the
    /// returned fingerprint. When `false` only the selected set is kept.
    pub include_intermediates: bool,
}

impl PerceptualConfig {
    /// Create a new configuration with the default comparison parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the n-gram size used by the n-gram overlap metric.
    pub fn with_ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = n;
        self
    }

    /// Set the hashed window length in tokens (k).
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the winnowing window size (w).
    pub fn with_w(mut self, w: usize) -> Self {
        self.w = w;
        self
    }

    /// Set the polynomial base.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Set the hash modulus.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Set the token hash seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Include or exclude intermediate hash streams in fingerprints.
    pub fn with_intermediates(mut self, include_intermediates: bool) -> Self {
        self.include_intermediates = include_intermediates;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.ngram_size < 1 {
            return Err(PerceptualError::InvalidConfigNgramSize { n: self.ngram_size });
        }
        if self.k < 1 {
            return Err(PerceptualError::InvalidConfigK { k: self.k });
        }
        if self.w < 1 {
            return Err(PerceptualError::InvalidConfigW { w: self.w });
        }
        if self.base < 1 {
            return Err(PerceptualError::InvalidConfigBase { base: self.base });
        }
        if self.modulus < 2 {
            return Err(PerceptualError::InvalidConfigModulus {
                modulus: self.modulus,
            });
        }
        Ok(())
    }
}

impl Default for PerceptualConfig {
    fn default() -> Self {
        Self {
            version: 1,
            ngram_size: 3,
            k: 5,
            w: 4,
            base: 101,
            modulus: 1_000_000_007,
            seed: 0xF00D_BAAD_F00D_BAAD,
            include_intermediates: true,
        }
    }
}

/// Errors returned by the perceptual layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("not enough tokens for k={k} (got {got})")]
    NotEnoughTokens { k: usize, got: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },

    #[error("invalid config: ngram_size must be >= 1 (got {n})")]
    InvalidConfigNgramSize { n: usize },

    #[error("invalid config: k must be >= 1 (got {k})")]
    InvalidConfigK { k: usize },

    #[error("invalid config: w must be >= 1 (got {w})")]
    InvalidConfigW { w: usize },

    #[error("invalid config: base must be >= 1 (got {base})")]
    InvalidConfigBase { base: u64 },

    #[error("invalid config: modulus must be >= 2 (got {modulus})")]
    InvalidConfigModulus { modulus: u64 },
}
