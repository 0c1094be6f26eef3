pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extract;
use crate::flows::handlers as flow_handlers;
use crate::preview::handlers as preview_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Preview API: classification, fragments, format check
        .route("/api/v1/preview", post(preview_handlers::handle_preview))
        // AI flows
        .route("/api/v1/optimize", post(flow_handlers::handle_optimize))
        .route(
            "/api/v1/summary/improve",
            post(flow_handlers::handle_improve_summary),
        )
        .route(
            "/api/v1/experience/improve",
            post(flow_handlers::handle_improve_experience),
        )
        // PDF upload → plain text
        .route("/api/v1/extract", post(extract::handle_extract))
        .with_state(state)
}
