use canonical::{CanonicalError, CanonicalizeConfig};
use perceptual::{PerceptualConfig, PerceptualError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text reported when two documents share no word at all.
pub const NO_COMMON_TEXT: &str = "No common text found";

/// Tolerance applied when checking that score weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the three scored metric families in the overall score.
///
/// The longest common run is reported but never weighted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    pub ngram: f64,
    pub fingerprint: f64,
    pub cosine: f64,
}

impl ScoreWeights {
    /// Weights must be finite, non-negative and sum to `1.0`.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, value) in [
            ("ngram", self.ngram),
            ("fingerprint", self.fingerprint),
            ("cosine", self.cosine),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "weights.{name} must be a finite value >= 0.0, got {value}"
                )));
            }
        }

        let sum = self.ngram + self.fingerprint + self.cosine;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidConfig(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ngram: 0.3,
            fingerprint: 0.2,
            cosine: 0.5,
        }
    }
}

/// Configuration of a [`Matcher`](crate::Matcher).
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs such as the server's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Configuration schema version for this match config.
    pub version: u32,
    /// Weights of the overall score.
    pub weights: ScoreWeights,
    /// Tokenizer configuration applied to both documents.
    pub canonical: CanonicalizeConfig,
    /// N-gram size and fingerprint parameters.
    pub perceptual: PerceptualConfig,
    /// Evaluate the metric families on the rayon pool.
    pub use_parallel: bool,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_canonical(mut self, canonical: CanonicalizeConfig) -> Self {
        self.canonical = canonical;
        self
    }

    pub fn with_perceptual(mut self, perceptual: PerceptualConfig) -> Self {
        self.perceptual = perceptual;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate this config and every nested stage config.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config.version must be >= 1".into(),
            ));
        }
        self.weights.validate()?;
        self.canonical.validate()?;
        self.perceptual.validate()?;
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            weights: ScoreWeights::default(),
            canonical: CanonicalizeConfig::default(),
            perceptual: PerceptualConfig::default(),
            use_parallel: false,
        }
    }
}

/// Outcome of comparing two documents. Every ratio lies in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    /// Jaccard similarity of the word n-gram sets.
    pub ngram_similarity: f64,
    /// Jaccard similarity of the winnowed fingerprint sets.
    pub fingerprint_similarity: f64,
    /// TF-IDF cosine similarity.
    pub cosine_similarity: f64,
    /// Length in words of the longest shared run.
    pub longest_common_words: usize,
    /// The longest shared run, or [`NO_COMMON_TEXT`].
    pub longest_common_text: String,
    /// Weighted combination of the three ratios.
    pub overall_score: f64,
}

impl ComparisonResult {
    /// Whether the documents share any word run.
    pub fn has_common_text(&self) -> bool {
        self.longest_common_words > 0
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid match configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Invalid tokenizer configuration.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    /// Invalid perceptual configuration.
    #[error("perceptual error: {0}")]
    Perceptual(#[from] PerceptualError),
}
