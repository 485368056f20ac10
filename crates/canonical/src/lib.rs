//! plagcheck canonical text layer.
//!
//! Turns raw document text into the ordered word token stream that every
//! similarity metric consumes.
//!
//! ## What we do
//!
//! - Optional Unicode NFKC normalization (off by default)
//! - Whole-string lowercasing
//! - Deletion of every character that is neither a word character
//!   (letter, number or `_`) nor whitespace. Deleted characters do not split
//!   tokens: `"end.Start"` → `"endstart"`
//! - Whitespace tokenization with byte offsets into the canonical text
//! - A versioned SHA-256 digest of the canonical text
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. The same text and config
//! give the same tokens on any machine.

mod config;
mod document;
mod error;
mod hash;
mod pipeline;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::document::CanonicalizedDocument;
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_canonical_bytes, hash_text};
pub use crate::pipeline::canonicalize;
pub use crate::token::{tokenize, Token};
