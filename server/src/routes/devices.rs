use crate::dto::{DeviceDetailResponse, DeviceSummary};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

pub(super) async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<DeviceSummary>>, ApiError> {
    let devices = state.catalog.search_by_name(&query).await?;
    Ok(Json(devices))
}

pub(super) async fn detail(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<DeviceDetailResponse>, ApiError> {
    let detail = state.catalog.get_device_detail(&device_id).await?;
    Ok(Json(detail))
}
