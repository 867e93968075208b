//! Inference pipeline: the one orchestrator every AI-backed feature runs through.
//!
//! Flow: prompt → bounded call → parse → (on any failure) synthesize → normalize.
//!
//! Features plug in as an `InferenceTask`. The orchestrator owns the failure
//! routing, so every feature gets the same guarantee: `run` always yields a
//! value, and that value has always been through `normalize`.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm_client::{CallParams, InferenceBackend, InferenceError, PromptPair};

/// Raw text was received but no parser strategy could use it.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("response text was empty")]
    Empty,

    #[error("no usable structure in response: {0}")]
    Unusable(String),
}

/// Why the synthesizer had to answer instead of the model.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

#[derive(Debug)]
pub enum Provenance {
    /// The parsed model response was used.
    Model,
    /// The synthesizer produced the value.
    Fallback(FallbackReason),
}

impl Provenance {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Provenance::Fallback(_))
    }
}

#[derive(Debug)]
pub struct PipelineOutput<T> {
    pub value: T,
    pub provenance: Provenance,
}

/// One AI-backed feature, expressed as the strategy set the orchestrator drives.
pub trait InferenceTask {
    type Output;

    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn prompt(&self) -> PromptPair;

    fn params(&self) -> CallParams;

    /// Runs the feature's ordered parser strategies over the raw model text.
    fn parse(&self, raw: &str) -> Result<Self::Output, ParseFailure>;

    /// Produces a complete value without the network. Must not fail.
    /// `raw` is the unusable model text when there was one, so partial
    /// content can still be harvested.
    fn synthesize(&mut self, raw: Option<&str>) -> Self::Output;

    /// Fills gaps and enforces invariants. The single exit point of `run`.
    fn normalize(&self, output: Self::Output) -> Self::Output;
}

/// Runs `task` against `backend`. Never fails: every error is routed to the
/// task's synthesizer and the result is always normalized.
pub async fn run<T>(backend: &dyn InferenceBackend, task: &mut T) -> PipelineOutput<T::Output>
where
    T: InferenceTask + Send,
{
    let run_id = Uuid::new_v4();
    let prompt = task.prompt();
    let params = task.params();

    info!(
        %run_id,
        task = task.name(),
        timeout_ms = params.timeout.as_millis() as u64,
        has_image = prompt.image_url.is_some(),
        "Starting inference pipeline"
    );

    let (value, provenance) = match backend.invoke(&prompt, &params).await {
        Ok(raw) => match task.parse(&raw) {
            Ok(parsed) => (parsed, Provenance::Model),
            Err(failure) => {
                warn!(%run_id, task = task.name(), "Parse failed, using fallback: {failure}");
                let value = task.synthesize(Some(&raw));
                (value, Provenance::Fallback(failure.into()))
            }
        },
        Err(err) => {
            warn!(%run_id, task = task.name(), "Inference failed, using fallback: {err}");
            let value = task.synthesize(None);
            (value, Provenance::Fallback(err.into()))
        }
    };

    info!(
        %run_id,
        task = task.name(),
        fallback = provenance.is_fallback(),
        "Inference pipeline finished"
    );

    PipelineOutput {
        value: task.normalize(value),
        provenance,
    }
}
