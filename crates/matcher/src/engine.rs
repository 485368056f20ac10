use std::time::Instant;

use canonical::{canonicalize, tokenize};
use lexical::{cosine_similarity, longest_common_run, CommonRun};
use perceptual::{fingerprint_similarity, ngram_similarity};
use tracing::debug;

use crate::metrics::metrics_recorder;
use crate::types::{ComparisonResult, MatchConfig, MatchError, ScoreWeights, NO_COMMON_TEXT};


/// Compares pairs of documents under one validated configuration.
///
/// A `Matcher` holds only immutable configuration, so a single instance can
/// be shared across threads and reused for any number of comparisons.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Validate `cfg` and build a matcher from it.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Tokenize both texts with the configured pipeline and compare them.
    pub fn compare(&self, text1: &str, text2: &str) -> Result<ComparisonResult, MatchError> {
        let start = Instant::now();
        let tokens1 = canonicalize(text1, &self.cfg.canonical)?.token_texts();
        let tokens2 = canonicalize(text2, &self.cfg.canonical)?.token_texts();
        Ok(self.compare_tokens_since(&tokens1, &tokens2, start))
    }

    /// Compare two already tokenized documents.
    pub fn compare_tokens<S>(&self, tokens1: &[S], tokens2: &[S]) -> ComparisonResult
    where
        S: AsRef<str> + Sync,
    {
        self.compare_tokens_since(tokens1, tokens2, Instant::now())
    }

    fn compare_tokens_since<S>(&self, tokens1: &[S], tokens2: &[S], start: Instant) -> ComparisonResult
    where
        S: AsRef<str> + Sync,
    {
        let scores = if self.cfg.use_parallel {
            self.scores_parallel(tokens1, tokens2)
        } else {
            self.scores_sequential(tokens1, tokens2)
        };

        let overall = overall_score(
            scores.ngram,
            scores.fingerprint,
            scores.cosine,
            &self.cfg.weights,
        );
        let latency = start.elapsed();

        debug!(
            tokens1 = tokens1.len(),
            tokens2 = tokens2.len(),
            ngram = scores.ngram,
            fingerprint = scores.fingerprint,
            cosine = scores.cosine,
            common_words = scores.run.length,
            overall,
            elapsed_micros = latency.as_micros() as u64,
            "match_compare"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_comparison(latency, overall);
        }

        let longest_common_text = if scores.run.is_empty() {
            NO_COMMON_TEXT.to_string()
        } else {
            scores.run.text
        };

        ComparisonResult {
            ngram_similarity: scores.ngram,
            fingerprint_similarity: scores.fingerprint,
            cosine_similarity: scores.cosine,
            longest_common_words: scores.run.length,
            longest_common_text,
            overall_score: overall,
        }
    }

    fn scores_sequential<S: AsRef<str>>(&self, tokens1: &[S], tokens2: &[S]) -> Scores {
        let perceptual = &self.cfg.perceptual;
        Scores {
            ngram: ngram_similarity(tokens1, tokens2, perceptual.ngram_size),
            fingerprint: fingerprint_similarity(tokens1, tokens2, perceptual),
            cosine: cosine_similarity(tokens1, tokens2),
            run: longest_common_run(tokens1, tokens2),
        }
    }

    fn scores_parallel<S>(&self, tokens1: &[S], tokens2: &[S]) -> Scores
    where
        S: AsRef<str> + Sync,
    {
        let perceptual = &self.cfg.perceptual;
        let ((ngram, fingerprint), (cosine, run)) = rayon::join(
            || {
                rayon::join(
                    || ngram_similarity(tokens1, tokens2, perceptual.ngram_size),
                    || fingerprint_similarity(tokens1, tokens2, perceptual),
                )
            },
            || {
                rayon::join(
                    || cosine_similarity(tokens1, tokens2),
                    || longest_common_run(tokens1, tokens2),
                )
            },
        );
        Scores {
            ngram,
            fingerprint,
            cosine,
            run,
        }
    }
}

struct Scores {
    ngram: f64,
    fingerprint: f64,
    cosine: f64,
    run: CommonRun,
}

/// Weighted combination of the three scored ratios, clamped to `[0, 1]`.
pub fn overall_score(ngram: f64, fingerprint: f64, cosine: f64, weights: &ScoreWeights) -> f64 {
    let score = weights.ngram * ngram + weights.fingerprint * fingerprint + weights.cosine * cosine;
    score.clamp(0.0, 1.0)
}

/// Compare two raw texts with the default configuration.
pub fn comprehensive_check(text1: &str, text2: &str) -> ComparisonResult {
    let start = Instant::now();
    let tokens1 = tokenize(text1);
    let tokens2 = tokenize(text2);
    Matcher::default().compare_tokens_since(&tokens1, &tokens2, start)
}
