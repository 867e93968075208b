//! Axum route handlers for the Collaborator API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::collaboration::RecommendationTask;
use crate::errors::AppError;
use crate::models::collaborator::CollaboratorRecommendation;
use crate::pipeline::run;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub preferences: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub artists: Vec<CollaboratorRecommendation>,
}

/// POST /api/v1/collaborators/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) = payload?;
    let preferences = request
        .preferences
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("Preferences are required".to_string()))?;

    let rng = match state.config.fallback_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut task = RecommendationTask::new(
        preferences,
        chrono::Utc::now().year(),
        state.recommendation_timeout(),
        rng,
    );

    let artists = run(state.inference.as_ref(), &mut task).await.value;
    Ok(Json(RecommendResponse { artists }))
}
