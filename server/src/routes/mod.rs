//! HTTP routes.

mod brands;
mod devices;
mod refresh;

use crate::dto::HealthResponse;
use crate::state::AppState;
use axum::routing::get;
use axum::{Json, Router};

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/update_db", get(refresh::trigger_refresh))
        .route("/search/:query", get(devices::search))
        .route("/devices/:device_id", get(devices::detail))
        .route("/brands", get(brands::list))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
