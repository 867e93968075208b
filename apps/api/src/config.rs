use anyhow::{Context, Result};

const DEFAULT_INFERENCE_API_URL: &str = "https://api.x.ai/v1/chat/completions";
const DEFAULT_INFERENCE_MODEL: &str = "grok-4";

/// Application configuration loaded from environment variables.
/// Built once at startup and carried in `AppState` until shutdown.
#[derive(Debug, Clone)]
pub struct Config {
    pub inference_api_key: String,
    pub inference_api_url: String,
    pub inference_model: String,
    /// Budget for the pricing call. Small responses, short budget.
    pub pricing_timeout_ms: u64,
    /// Budget for the recommendation call. Large JSON payloads take longer.
    pub recommendation_timeout_ms: u64,
    /// Seeds the recommendation fallback when set, making it reproducible.
    pub fallback_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            // Empty is allowed: calls then fail upstream and the fallback answers.
            inference_api_key: std::env::var("INFERENCE_API_KEY").unwrap_or_default(),
            inference_api_url: std::env::var("INFERENCE_API_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_API_URL.to_string()),
            inference_model: std::env::var("INFERENCE_MODEL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_MODEL.to_string()),
            pricing_timeout_ms: parse_env_or("PRICING_TIMEOUT_MS", 20_000)?,
            recommendation_timeout_ms: parse_env_or("RECOMMENDATION_TIMEOUT_MS", 60_000)?,
            fallback_seed: match std::env::var("FALLBACK_SEED") {
                Ok(raw) => Some(
                    raw.parse::<u64>()
                        .context("FALLBACK_SEED must be an unsigned integer")?,
                ),
                Err(_) => None,
            },
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing at an arbitrary upstream, for tests.
    pub fn for_upstream(url: &str) -> Self {
        Config {
            inference_api_key: "test-key".to_string(),
            inference_api_url: url.to_string(),
            inference_model: "test-model".to_string(),
            pricing_timeout_ms: 20_000,
            recommendation_timeout_ms: 60_000,
            fallback_seed: Some(7),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
