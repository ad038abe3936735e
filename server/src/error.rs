//! Error types for HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use specdex_core::{PaginationError, SpecdexError};
use specdex_db::DatabaseError;
use thiserror::Error;

/// Failures of the catalog query service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Nothing matched the request.
    #[error("{0}")]
    NotFound(String),

    /// The request was rejected before touching the store.
    #[error("{0}")]
    Validation(String),

    /// The store failed.
    #[error("database error: {0}")]
    Database(DatabaseError),
}

impl From<DatabaseError> for ServiceError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFoundWithMessage(msg) => Self::NotFound(msg),
            other => Self::Database(other),
        }
    }
}

impl From<PaginationError> for ServiceError {
    fn from(err: PaginationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SpecdexError> for ServiceError {
    fn from(err: SpecdexError) -> Self {
        match err {
            SpecdexError::Validation(msg) => Self::Validation(msg),
        }
    }
}

/// JSON error body returned by every failing route.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Stable error code (e.g. `NOT_FOUND`)
    pub code: String,
    /// Human readable message
    pub message: String,
    /// Optional structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    /// Create an error with no details.
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            status,
        }
    }

    /// Attach structured details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// HTTP status this error is sent with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ServiceError::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            ServiceError::Database(e) => {
                tracing::error!("Database error: {}", e);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "The device store is unavailable",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
