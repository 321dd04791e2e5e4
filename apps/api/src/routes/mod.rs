pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::drafting::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Drafts API
        .route("/api/v1/drafts/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/drafts/keywords",
            post(handlers::handle_extract_keywords),
        )
        // Catalog API
        .route("/api/v1/offerings", get(handlers::handle_get_offerings))
        .with_state(state)
}
