use crate::dto::{BrandsPage, BrandsQuery};
use crate::error::{ApiError, ServiceError};
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

pub(super) async fn list(
    State(state): State<AppState>,
    query: Result<Query<BrandsQuery>, QueryRejection>,
) -> Result<Json<BrandsPage>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("Rejected brands query: {}", rejection.body_text());
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "page and limit must be integers",
        )
        .with_details(serde_json::json!({ "reason": rejection.body_text() }))
    })?;

    match state.catalog.list_brands(query.page, query.limit).await {
        Ok(page) => Ok(Json(page)),
        Err(e @ ServiceError::Validation(_)) => Err(ApiError::from(e).with_details(
            serde_json::json!({
                "page": query.page,
                "limit": query.limit,
                "max_limit": state.catalog.api().max_page_size,
            }),
        )),
        Err(e) => Err(e.into()),
    }
}
