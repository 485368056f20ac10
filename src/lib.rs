//! Workspace umbrella crate for plagcheck.
//!
//! Re-exports the tokenizer, every similarity metric and the comparison
//! engine so callers can depend on a single crate, and adds file-level
//! helpers used by the `plagcheck` command-line tool.

pub use canonical::{
    CanonicalError, CanonicalizeConfig, CanonicalizedDocument, Token, canonicalize, hash_text,
    tokenize,
};
pub use lexical::{
    CommonRun, cosine_similarity, cosine_similarity_text, longest_common_run,
    longest_common_run_text,
};
pub use matcher::{
    ComparisonResult, MatchConfig, MatchError, MatchMetrics, Matcher, NO_COMMON_TEXT, ScoreWeights,
    comprehensive_check, overall_score, set_match_metrics,
};
pub use perceptual::{
    PerceptualConfig, PerceptualError, PerceptualFingerprint, fingerprint_similarity,
    fingerprint_similarity_text, fingerprint_tokens, ngram_similarity, ngram_similarity_text,
};

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::info;

/// Errors raised while comparing documents stored on disk.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Read a UTF-8 document from disk.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, DocumentError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read two documents and compare them with `matcher`.
pub fn compare_files(
    matcher: &Matcher,
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
) -> Result<ComparisonResult, DocumentError> {
    let start = Instant::now();
    let text1 = read_document(&path1)?;
    let text2 = read_document(&path2)?;
    let result = matcher.compare(&text1, &text2)?;

    info!(
        doc1_sha256 = %hash_text(&text1),
        doc2_sha256 = %hash_text(&text2),
        overall_score = result.overall_score,
        elapsed_micros = start.elapsed().as_micros() as u64,
        "compare_files"
    );

    Ok(result)
}
