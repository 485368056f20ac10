//! Document types for the canonical text pipeline.
//!
//! For a fixed configuration version and input text, all fields of
//! [`CanonicalizedDocument`] are deterministic.
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//!
//! let doc = canonicalize("Hello, world!", &CanonicalizeConfig::default()).unwrap();
//! assert_eq!(doc.canonical_text, "hello world");
//! assert_eq!(doc.tokens.len(), 2);
//! assert_eq!(doc.tokens[1].text, "world");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;
use crate::token::Token;

/// The canonical representation of a text document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizedDocument {
    /// Tokens joined with single ASCII spaces.
    pub canonical_text: String,
    /// Tokens in document order, with byte offsets into `canonical_text`.
    pub tokens: Vec<Token>,
    /// Version-aware SHA-256 digest of `canonical_text` (hex).
    pub sha256_hex: String,
    /// Version of the rules that produced this document.
    pub canonical_version: u32,
    /// Snapshot of the configuration used.
    pub config: CanonicalizeConfig,
}

impl CanonicalizedDocument {
    /// Token texts in document order.
    pub fn token_texts(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }

    /// Number of tokens in the document.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the document produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
