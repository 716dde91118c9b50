use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use weldstock_core::DomainError;
use weldstock_infra::StoreError;

/// Handler failure, mapped to a JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid request body: {0}")]
    Json(#[from] JsonRejection),

    #[error("invalid path: {0}")]
    Path(#[from] PathRejection),

    #[error("invalid query: {0}")]
    Query(#[from] QueryRejection),

    /// The blocking store task panicked or was cancelled.
    #[error("store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(e) => {
                let status = match e {
                    DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                };
                json_error(status, e.code(), e.to_string())
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "inventory store failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
            ApiError::Json(e) => json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text()),
            ApiError::Path(e) => json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text()),
            ApiError::Query(e) => json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text()),
            ApiError::Join(e) => {
                tracing::error!(error = %e, "inventory store task failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e.to_string())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
