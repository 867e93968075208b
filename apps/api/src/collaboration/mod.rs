// Artist collaborator recommendation.
// Implements: keyword derivation, ordered JSON parsing with repair, name
// harvesting, seeded fallback synthesis, normalization.

pub mod fallback;
pub mod handlers;
pub mod harvest;
pub mod highlights;
pub mod keywords;
pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod repair;

use std::time::Duration;

use rand::Rng;

use crate::llm_client::{CallParams, PromptPair};
use crate::models::collaborator::CollaboratorRecommendation;
use crate::pipeline::{InferenceTask, ParseFailure};

const RECOMMENDATION_TEMPERATURE: f32 = 0.5;
const RECOMMENDATION_MAX_TOKENS: u32 = 2000;

/// The recommendation feature as a pipeline task. `rng` drives every random
/// choice in the fallback, so a seeded generator gives reproducible output.
pub struct RecommendationTask<R> {
    pub preferences: String,
    pub keywords: Vec<String>,
    pub current_year: i32,
    pub timeout: Duration,
    pub rng: R,
}

impl<R: Rng> RecommendationTask<R> {
    pub fn new(preferences: &str, current_year: i32, timeout: Duration, rng: R) -> Self {
        Self {
            preferences: preferences.trim().to_string(),
            keywords: keywords::derive_keywords(preferences),
            current_year,
            timeout,
            rng,
        }
    }
}

impl<R: Rng + Send> InferenceTask for RecommendationTask<R> {
    type Output = Vec<CollaboratorRecommendation>;

    fn name(&self) -> &'static str {
        "recommendation"
    }

    fn prompt(&self) -> PromptPair {
        prompts::build_recommendation_prompt(&self.preferences, &self.keywords)
    }

    fn params(&self) -> CallParams {
        CallParams {
            max_tokens: RECOMMENDATION_MAX_TOKENS,
            temperature: RECOMMENDATION_TEMPERATURE,
            timeout: self.timeout,
        }
    }

    fn parse(&self, raw: &str) -> Result<Self::Output, ParseFailure> {
        let candidates = parser::parse_candidates(raw)?;
        Ok(candidates
            .iter()
            .map(|c| normalizer::from_candidate(c, self.current_year))
            .collect())
    }

    fn synthesize(&mut self, raw: Option<&str>) -> Self::Output {
        let harvested = raw.map(harvest::harvest).unwrap_or_default();
        fallback::synthesize_recommendations(
            &harvested,
            &self.keywords,
            self.current_year,
            &mut self.rng,
        )
    }

    fn normalize(&self, output: Self::Output) -> Self::Output {
        normalizer::normalize_recommendations(output)
    }
}
