use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use matcher::{ComparisonResult, MatchError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Check request: the two documents to compare.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text1: Option<String>,
    #[serde(default)]
    pub text2: Option<String>,
}

/// Check response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub success: bool,
    pub results: CheckResults,
}

/// Comparison result in presentation form: ratios become percentages
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResults {
    pub ngram_similarity: f64,
    pub fingerprint_similarity: f64,
    pub cosine_similarity: f64,
    pub longest_common_words: usize,
    pub longest_common_text: String,
    pub overall_score: f64,
}

/// `ratio * 100`, rounded to 2 decimal places.
pub fn to_percentage(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

impl From<ComparisonResult> for CheckResults {
    fn from(result: ComparisonResult) -> Self {
        Self {
            ngram_similarity: to_percentage(result.ngram_similarity),
            fingerprint_similarity: to_percentage(result.fingerprint_similarity),
            cosine_similarity: to_percentage(result.cosine_similarity),
            longest_common_words: result.longest_common_words,
            longest_common_text: result.longest_common_text,
            overall_score: to_percentage(result.overall_score),
        }
    }
}

/// Compare two documents for plagiarism.
///
/// Both `text1` and `text2` must be present and non-empty. The comparison
/// is CPU-bound and runs on the blocking pool. Document text never reaches
/// the logs; only SHA-256 digests and sizes do.
pub async fn check_documents(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> ServerResult<Json<CheckResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_mb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })?;

    let (text1, text2) = match (request.text1, request.text2) {
        (Some(text1), Some(text2)) if !text1.is_empty() && !text2.is_empty() => (text1, text2),
        _ => return Err(ServerError::MissingDocuments),
    };

    tracing::info!(
        doc1_sha256 = %canonical::hash_text(&text1),
        doc2_sha256 = %canonical::hash_text(&text2),
        doc1_bytes = text1.len(),
        doc2_bytes = text2.len(),
        "check_request"
    );

    let matcher = Arc::clone(&state.matcher);
    let result = run_comparison(move || matcher.compare(&text1, &text2)).await?;

    Ok(Json(CheckResponse {
        success: true,
        results: CheckResults::from(result),
    }))
}

/// Runs a comparison on the blocking pool. A panic inside the job surfaces
/// as `ServerError::Internal` instead of tearing down the connection.
///
/// The request timeout drops the awaiting future but cannot stop the job:
/// a comparison that outlives its request still runs to completion on its
/// blocking thread and its result is discarded. The longest common run is
/// O(m·n) in the token counts, so the body size limit is what bounds it.
pub(crate) async fn run_comparison<F>(job: F) -> ServerResult<ComparisonResult>
where
    F: FnOnce() -> Result<ComparisonResult, MatchError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(job).await.map_err(|err| {
        tracing::error!(error = %err, "comparison task failed");
        ServerError::Internal("comparison failed".to_string())
    })??;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(1.0 / 3.0), 33.33);
    }

    #[test]
    fn test_results_conversion() {
        let result = ComparisonResult {
            ngram_similarity: 0.5,
            fingerprint_similarity: 0.25,
            cosine_similarity: 0.8,
            longest_common_words: 4,
            longest_common_text: "sat on the mat".into(),
            overall_score: 0.6,
        };
        let results = CheckResults::from(result);
        assert_eq!(results.ngram_similarity, 50.0);
        assert_eq!(results.fingerprint_similarity, 25.0);
        assert_eq!(results.cosine_similarity, 80.0);
        assert_eq!(results.overall_score, 60.0);
        assert_eq!(results.longest_common_words, 4);

        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("ngramSimilarity").is_some());
        assert!(json.get("longestCommonText").is_some());
    }

    #[tokio::test]
    async fn panicking_comparison_becomes_internal_error() {
        let err = run_comparison(|| panic!("comparison blew up"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Internal(_)));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn completed_comparison_passes_through() {
        let result = run_comparison(|| Ok(matcher::comprehensive_check("a b c", "a b c")))
            .await
            .unwrap();
        assert_eq!(result.longest_common_words, 3);
    }
}
