//! API error types with IntoResponse.
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use userd_core::StoreError;

use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// No user at the given id (404)
    NotFound { id: i64 },

    /// Username or email already taken (409)
    Conflict,

    /// Store unreachable (503, logged)
    Unavailable { detail: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("user '{}' not found", id)
                }),
            ),
            Self::Conflict => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": "username or email already exists"
                }),
            ),
            Self::Unavailable { detail } => {
                // Log the actual error, return generic message
                tracing::error!("Store unavailable: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "service_unavailable",
                        "message": "service temporarily unavailable"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id },
            StoreError::DuplicateUser => Self::Conflict,
            StoreError::Unavailable(detail) => Self::Unavailable { detail },
        }
    }
}
