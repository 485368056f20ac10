//! Configuration types for the canonical text pipeline.
//!
//! [`CanonicalizeConfig`] controls how raw document text is turned into the
//! word token stream that every similarity metric consumes.
//!
//! # Versioning
//!
//! The `version` field is part of the canonical digest. Any change to the
//! tokenization behavior (even a bug fix) must be accompanied by a version
//! bump so that digests produced by different rules never collide.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.normalize_unicode);
//! assert!(config.strip_punctuation);
//! assert!(config.lowercase);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the canonical text pipeline.
///
/// The defaults reproduce the comparison tokenizer exactly: lowercase the
/// text, delete every character that is neither a word character nor
/// whitespace, then split on whitespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the canonicalization rules. Must be >= 1.
    pub version: u32,

    /// Apply Unicode NFKC normalization before any other transform.
    ///
    /// Off by default: the comparison tokenizer works on the text exactly as
    /// submitted. Enabling it makes composed and decomposed forms
    /// (`"é"` vs `"e\u{0301}"`) tokenize identically.
    pub normalize_unicode: bool,

    /// Delete characters that are neither word characters (letters, numbers
    /// or `_`) nor separators.
    ///
    /// Deleted characters are *not* replaced with a separator, so
    /// `"end.Start"` becomes the single token `"endstart"`.
    pub strip_punctuation: bool,

    /// Apply locale-free Unicode lowercasing to the whole text.
    pub lowercase: bool,
}

impl CanonicalizeConfig {
    /// Create a configuration with the default comparison rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable punctuation deletion.
    pub fn with_strip_punctuation(mut self, enabled: bool) -> Self {
        self.strip_punctuation = enabled;
        self
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            strip_punctuation: true,
            lowercase: true,
        }
    }
}
