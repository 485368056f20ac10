//! Logging and metrics initialization
//!
//! Installs the JSON `tracing` subscriber and the Prometheus recorder, and
//! bridges the matcher's [`MatchMetrics`] hook onto the `metrics` facade.

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const COMPARISONS_TOTAL: &str = "plagcheck_comparisons_total";
pub const COMPARISON_LATENCY_SECONDS: &str = "plagcheck_comparison_latency_seconds";
pub const COMPARISON_OVERALL_SCORE: &str = "plagcheck_comparison_overall_score";
pub const HTTP_REQUESTS_TOTAL: &str = "plagcheck_http_requests_total";

/// Install the process-wide JSON log subscriber.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

/// Install the global Prometheus recorder and route matcher observations
/// into it.
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
    Ok(handle)
}

/// [`MatchMetrics`] implementation backed by the `metrics` facade.
#[derive(Debug, Default)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_comparison(&self, latency: Duration, overall_score: f64) {
        metrics::counter!(COMPARISONS_TOTAL).increment(1);
        metrics::histogram!(COMPARISON_LATENCY_SECONDS).record(latency.as_secs_f64());
        metrics::histogram!(COMPARISON_OVERALL_SCORE).record(overall_score);
    }
}
