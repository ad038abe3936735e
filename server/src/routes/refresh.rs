use crate::dto::RefreshResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

/// Start a refresh and acknowledge without waiting for it.
pub(super) async fn trigger_refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let run_id = state.refresh.trigger();
    tracing::info!(%run_id, "Refresh requested");

    Json(RefreshResponse {
        success: true,
        message: "Database update started in background".to_string(),
    })
}
