/// LLM Client: the single point of entry for all remote inference calls.
///
/// ARCHITECTURAL RULE: No other module may call the inference provider directly.
/// Features talk to `InferenceBackend`; `LlmClient` is its HTTP implementation.
///
/// One attempt per call, bounded by the caller's timeout. Failures are returned
/// as classified `InferenceError` values for the pipeline to recover from.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

/// Longest slice of an upstream error body kept for logs.
const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference call timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// System/user prompt pair plus an optional image reference passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
    pub image_url: Option<String>,
}

/// Generation parameters and time budget for a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

/// The seam between the pipeline and whatever answers prompts.
/// Carried in `AppState` as `Arc<dyn InferenceBackend>`.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Returns the raw text of the first completion choice.
    async fn invoke(&self, prompt: &PromptPair, params: &CallParams)
        -> Result<String, InferenceError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI-style chat completion)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageRef<'a> },
}

#[derive(Debug, Serialize)]
struct ImageRef<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// Content of the first choice, if it is present and non-blank.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

fn build_request<'a>(model: &'a str, prompt: &'a PromptPair, params: &CallParams) -> ChatRequest<'a> {
    let user_content = match prompt.image_url.as_deref() {
        Some(url) => MessageContent::Parts(vec![
            ContentPart::Text { text: &prompt.user },
            ContentPart::ImageUrl {
                image_url: ImageRef { url },
            },
        ]),
        None => MessageContent::Text(&prompt.user),
    };

    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(&prompt.system),
            },
            ChatMessage {
                role: "user",
                content: user_content,
            },
        ],
        stream: false,
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP client
// ────────────────────────────────────────────────────────────────────────────

/// The single inference client used by all features.
/// Credentials and endpoint come from `Config` at construction time.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            // No client-wide timeout: every call carries its own budget.
            client: Client::builder()
                .build()
                .context("Failed to build HTTP client")?,
            api_url: config.inference_api_url.clone(),
            api_key: config.inference_api_key.clone(),
            model: config.inference_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, prompt: &PromptPair, params: &CallParams) -> Result<String, InferenceError> {
        let request_body = build_request(&self.model, prompt, params);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(format!("undecodable envelope: {e}")))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Inference call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .text()
            .map(str::to_string)
            .ok_or_else(|| InferenceError::MalformedResponse("no content in first choice".to_string()))
    }
}

#[async_trait]
impl InferenceBackend for LlmClient {
    async fn invoke(
        &self,
        prompt: &PromptPair,
        params: &CallParams,
    ) -> Result<String, InferenceError> {
        // Dropping the in-flight future on expiry aborts the request.
        match tokio::time::timeout(params.timeout, self.send(prompt, params)).await {
            Ok(result) => result,
            Err(_) => {
                let after_ms = params.timeout.as_millis() as u64;
                warn!("Inference call to {} aborted after {after_ms}ms", self.model);
                Err(InferenceError::Timeout { after_ms })
            }
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_upstream;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn prompt(image_url: Option<&str>) -> PromptPair {
        PromptPair {
            system: "sys".to_string(),
            user: "price this".to_string(),
            image_url: image_url.map(str::to_string),
        }
    }

    fn params(timeout_ms: u64) -> CallParams {
        CallParams {
            max_tokens: 50,
            temperature: 0.1,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    fn client_for(url: &str) -> LlmClient {
        LlmClient::new(&Config::for_upstream(url)).unwrap()
    }

    fn completion(content: Value) -> Json<Value> {
        Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
        }))
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n[{\"key\": \"value\"}]\n```";
        assert_eq!(strip_json_fences(input), "[{\"key\": \"value\"}]");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_is_text_only_without_image() {
        let p = prompt(None);
        let body = serde_json::to_value(build_request("m", &p, &params(10))).unwrap();
        assert_eq!(body["messages"][1]["content"], "price this");
        assert_eq!(body["stream"], false);
        assert_eq!(body["max_tokens"], 50);
    }

    #[test]
    fn test_request_is_multimodal_with_image() {
        let p = prompt(Some("https://img.example/a.png"));
        let body = serde_json::to_value(build_request("m", &p, &params(10))).unwrap();
        let parts = &body["messages"][1]["content"];
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "https://img.example/a.png");
    }

    #[tokio::test]
    async fn test_success_returns_first_choice_and_sends_credentials() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                completion(json!(format!("{auth}|{}", body["model"].as_str().unwrap_or(""))))
            }),
        );
        let url = spawn_upstream(router).await;

        let text = client_for(&url).invoke(&prompt(None), &params(2_000)).await.unwrap();
        assert_eq!(text, "Bearer test-key|test-model");
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
        );
        let url = spawn_upstream(router).await;

        let err = client_for(&url).invoke(&prompt(None), &params(2_000)).await.unwrap_err();
        match err {
            InferenceError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_content_is_malformed() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { completion(json!("   ")) }),
        );
        let url = spawn_upstream(router).await;

        let err = client_for(&url).invoke(&prompt(None), &params(2_000)).await.unwrap_err();
        assert!(matches!(err, InferenceError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_choices_is_malformed() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "id": "x" })) }),
        );
        let url = spawn_upstream(router).await;

        let err = client_for(&url).invoke(&prompt(None), &params(2_000)).await.unwrap_err();
        assert!(matches!(err, InferenceError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out_at_budget() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                completion(json!("too late"))
            }),
        );
        let url = spawn_upstream(router).await;

        let started = std::time::Instant::now();
        let err = client_for(&url).invoke(&prompt(None), &params(150)).await.unwrap_err();
        assert!(matches!(err, InferenceError::Timeout { after_ms: 150 }));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{addr}/v1/chat/completions");
        let err = client_for(&url).invoke(&prompt(None), &params(2_000)).await.unwrap_err();
        assert!(matches!(err, InferenceError::Network(_)));
    }
}
