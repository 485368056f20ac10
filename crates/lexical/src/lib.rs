//! plagcheck lexical similarity.
//!
//! Token-level metrics that look at word frequency and word order rather
//! than set overlap:
//!
//! - [`cosine_similarity`]: TF-IDF weighted cosine of the two documents,
//!   with IDF computed over the pair itself.
//! - [`longest_common_run`]: the longest run of consecutive words shared by
//!   both documents.
//!
//! Both are pure functions of their token inputs.
//!
//! ```
//! use lexical::{cosine_similarity, longest_common_run};
//!
//! let a = vec!["the", "cat", "sat", "on", "the", "mat"];
//! let b = vec!["the", "dog", "sat", "on", "the", "mat", "today"];
//!
//! let run = longest_common_run(&a, &b);
//! assert_eq!(run.text, "sat on the mat");
//!
//! let score = cosine_similarity(&a, &b);
//! assert!(score > 0.0 && score <= 1.0);
//! ```

mod run;
mod tfidf;

pub use crate::run::{longest_common_run, CommonRun};
pub use crate::tfidf::{
    cosine, cosine_similarity, inverse_document_frequencies, term_frequencies, weight_vector,
    WeightVector,
};

/// TF-IDF cosine similarity of two raw texts.
#[cfg(feature = "with_canonical")]
pub fn cosine_similarity_text(text1: &str, text2: &str) -> f64 {
    let tokens1 = canonical::tokenize(text1);
    let tokens2 = canonical::tokenize(text2);
    cosine_similarity(&tokens1, &tokens2)
}

/// Longest common word run of two raw texts.
#[cfg(feature = "with_canonical")]
pub fn longest_common_run_text(text1: &str, text2: &str) -> CommonRun {
    let tokens1 = canonical::tokenize(text1);
    let tokens2 = canonical::tokenize(text2);
    longest_common_run(&tokens1, &tokens2)
}
