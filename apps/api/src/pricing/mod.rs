// Artwork price suggestion.
// Implements: prompt building, range parsing + narrowing, band fallback, normalization.
// All LLM calls go through the pipeline; no direct provider calls here.

pub mod fallback;
pub mod handlers;
pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod range;
pub mod rationale;

use std::time::Duration;

use crate::llm_client::{CallParams, PromptPair};
use crate::models::artwork::{ArtworkDetails, PricingSuggestion};
use crate::pipeline::{InferenceTask, ParseFailure};

const PRICING_TEMPERATURE: f32 = 0.1;
const PRICING_MAX_TOKENS: u32 = 300;

/// The pricing feature as a pipeline task.
pub struct PricingTask<'a> {
    pub details: &'a ArtworkDetails,
    pub image_url: Option<&'a str>,
    pub current_year: i32,
    pub timeout: Duration,
}

impl InferenceTask for PricingTask<'_> {
    type Output = PricingSuggestion;

    fn name(&self) -> &'static str {
        "pricing"
    }

    fn prompt(&self) -> PromptPair {
        prompts::build_pricing_prompt(self.details, self.image_url, self.current_year)
    }

    fn params(&self) -> CallParams {
        CallParams {
            max_tokens: PRICING_MAX_TOKENS,
            temperature: PRICING_TEMPERATURE,
            timeout: self.timeout,
        }
    }

    fn parse(&self, raw: &str) -> Result<PricingSuggestion, ParseFailure> {
        parser::parse_pricing_response(raw, self.details, self.current_year)
    }

    fn synthesize(&mut self, _raw: Option<&str>) -> PricingSuggestion {
        fallback::generate_fallback(self.details, self.current_year)
    }

    fn normalize(&self, output: PricingSuggestion) -> PricingSuggestion {
        normalizer::normalize_pricing(output, self.details, self.current_year)
    }
}
