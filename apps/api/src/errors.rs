use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid contact URL: {0}")]
    InvalidContactUrl(String),

    #[error("Profile too sparse: {0}")]
    ProfileTooSparse(String),

    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidContactUrl(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_CONTACT_URL",
                msg.clone(),
            ),
            AppError::ProfileTooSparse(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PROFILE_TOO_SPARSE",
                msg.clone(),
            ),
            AppError::CatalogLoad(msg) => {
                tracing::error!("Catalog load error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CATALOG_LOAD_FAILURE",
                    "The offerings catalog could not be loaded".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
