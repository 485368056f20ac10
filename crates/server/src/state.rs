use crate::config::ServerConfig;
use crate::error::ServerResult;
use matcher::Matcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Comparison engine (shared across requests)
    pub matcher: Arc<Matcher>,

    /// Prometheus render handle, present when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state, validating the matcher configuration.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let matcher = Arc::new(Matcher::new(config.matcher.clone())?);

        Ok(Self {
            config: Arc::new(config),
            matcher,
            metrics: None,
        })
    }

    /// Attach a Prometheus handle used to render `GET /metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
