//! Hashing utilities for the canonical text pipeline.
//!
//! ## Document digest
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)
//! ```
//!
//! The digest identifies a canonical document without carrying its content,
//! which makes it suitable for logs and traces.
//!
//! ```rust
//! use canonical::{hash_text, hash_canonical_bytes};
//!
//! assert_eq!(hash_text("hello world").len(), 64);
//! assert_ne!(
//!     hash_canonical_bytes(1, b"hello world"),
//!     hash_canonical_bytes(2, b"hello world"),
//! );
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic; for canonical document identity use
/// [`hash_canonical_bytes`].
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the canonical digest for canonical text under a rules version.
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
