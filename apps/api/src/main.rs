mod collaboration;
mod config;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod pricing;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::panic_response;
use crate::llm_client::{InferenceBackend, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Artisan API v{}", env!("CARGO_PKG_VERSION"));

    if config.inference_api_key.trim().is_empty() {
        warn!("INFERENCE_API_KEY is not set; every request will be served by the fallback");
    }

    // Initialize inference client
    let llm = LlmClient::new(&config)?;
    info!(
        "Inference client initialized (model: {}, url: {})",
        llm.model(),
        config.inference_api_url
    );
    let inference: Arc<dyn InferenceBackend> = Arc::new(llm);

    let state = AppState {
        inference,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
