//! Shared test fixtures: a throwaway upstream server and a scripted backend.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;

use crate::llm_client::{CallParams, InferenceBackend, InferenceError, PromptPair};

/// Serves `router` on an ephemeral local port and returns the completions URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1/chat/completions")
}

/// Canned outcome for `ScriptedBackend`.
#[derive(Debug, Clone)]
pub enum Script {
    Text(String),
    Timeout,
    Upstream(u16),
    Network,
    Malformed,
}

/// Backend that answers every call with the same scripted outcome and
/// remembers the prompts it was given.
pub struct ScriptedBackend {
    script: Script,
    pub calls: Mutex<Vec<(PromptPair, CallParams)>>,
}

impl ScriptedBackend {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(Script::Text(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn invoke(
        &self,
        prompt: &PromptPair,
        params: &CallParams,
    ) -> Result<String, InferenceError> {
        self.calls.lock().unwrap().push((prompt.clone(), *params));
        match &self.script {
            Script::Text(text) => Ok(text.clone()),
            Script::Timeout => Err(InferenceError::Timeout {
                after_ms: params.timeout.as_millis() as u64,
            }),
            Script::Upstream(status) => Err(InferenceError::Upstream {
                status: *status,
                message: "scripted".to_string(),
            }),
            Script::Network => Err(InferenceError::Network("scripted".to_string())),
            Script::Malformed => Err(InferenceError::MalformedResponse("scripted".to_string())),
        }
    }
}
