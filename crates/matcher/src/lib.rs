//! # plagcheck Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the comparison engine. It tokenizes two documents with
//! `canonical`, runs every similarity metric from `perceptual` and `lexical`
//! over the token streams, and combines them into one overall score.
//!
//! ## Core Types
//!
//! - [`comprehensive_check`]: compare two texts with the default settings.
//! - [`Matcher`]: a reusable engine built from a validated [`MatchConfig`].
//! - [`ComparisonResult`]: the per-metric ratios, the longest shared word run
//!   and the overall score.
//! - [`ScoreWeights`]: weights of the overall score. The default is
//!   `0.3·ngram + 0.2·fingerprint + 0.5·cosine`.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{comprehensive_check, MatchConfig, Matcher};
//!
//! let result = comprehensive_check("The cat sat on the mat", "the dog sat on the mat today");
//! assert_eq!(result.longest_common_words, 4);
//! assert_eq!(result.longest_common_text, "sat on the mat");
//! assert!(result.overall_score > 0.0 && result.overall_score < 1.0);
//!
//! let matcher = Matcher::new(MatchConfig::default().with_parallel(true)).unwrap();
//! let same = matcher.compare("Some text here", "some text here!").unwrap();
//! assert_eq!(same.ngram_similarity, 1.0);
//! ```
//!
//! ## Observability
//!
//! Every comparison emits a `match_compare` debug event with token counts,
//! scores and elapsed time; document text is never logged. Install a
//! [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! per-comparison latency and scores.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{comprehensive_check, overall_score, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{
    ComparisonResult, MatchConfig, MatchError, ScoreWeights, NO_COMMON_TEXT, WEIGHT_SUM_TOLERANCE,
};
