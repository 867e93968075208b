pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::collaboration::handlers::handle_recommend;
use crate::pricing::handlers::handle_suggest_price;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pricing API
        .route("/api/v1/pricing/suggest", post(handle_suggest_price))
        // Collaborator API
        .route("/api/v1/collaborators/recommend", post(handle_recommend))
        .with_state(state)
}
