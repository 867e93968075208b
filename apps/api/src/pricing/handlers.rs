//! Axum route handlers for the Pricing API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::artwork::ArtworkDetails;
use crate::pipeline::run;
use crate::pricing::PricingTask;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub artwork_details: Option<ArtworkDetails>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub success: bool,
    pub price_range: String,
    pub rationale: String,
    pub full_response: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/pricing/suggest
///
/// Suggests a price range for an artwork. Only a missing image reference is an
/// error; upstream trouble is answered by the fallback with the same 200 shape.
pub async fn handle_suggest_price(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> Result<Json<PricingResponse>, AppError> {
    let Json(request) = payload?;
    let image_url = request
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::Validation("Image URL is required".to_string()))?;

    let details = request.artwork_details.unwrap_or_default();
    let mut task = PricingTask {
        details: &details,
        image_url: Some(image_url),
        current_year: chrono::Utc::now().year(),
        timeout: state.pricing_timeout(),
    };

    let suggestion = run(state.inference.as_ref(), &mut task).await.value;

    Ok(Json(PricingResponse {
        success: true,
        full_response: suggestion.full_response(),
        price_range: suggestion.price_range,
        rationale: suggestion.rationale,
    }))
}
