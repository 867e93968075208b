use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::llm_client::InferenceBackend;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request mutable state: concurrent requests never contend.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable inference backend. Default: `LlmClient` over HTTP.
    pub inference: Arc<dyn InferenceBackend>,
    pub config: Config,
}

impl AppState {
    pub fn pricing_timeout(&self) -> Duration {
        Duration::from_millis(self.config.pricing_timeout_ms)
    }

    pub fn recommendation_timeout(&self) -> Duration {
        Duration::from_millis(self.config.recommendation_timeout_ms)
    }
}
