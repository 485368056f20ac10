use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;
use crate::pipeline::canonicalize_unchecked;

/// A token with its UTF-8 byte offsets in the canonical text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the canonical text.
    pub start: usize,
    /// Byte offset (exclusive) in the canonical text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Tokenizes raw document text into lowercase word tokens.
///
/// Lowercases, deletes every character that is neither a word character nor
/// whitespace, splits on whitespace and drops empty tokens. Punctuation is
/// deleted rather than treated as a separator, so adjacent words can fuse:
///
/// ```rust
/// use canonical::tokenize;
///
/// assert_eq!(tokenize("end.Start now"), vec!["endstart", "now"]);
/// ```
///
/// This is a total function: every input, including the empty string,
/// produces a (possibly empty) token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    canonicalize_unchecked(text, &CanonicalizeConfig::default())
        .tokens
        .into_iter()
        .map(|t| t.text)
        .collect()
}
