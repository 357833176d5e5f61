use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::client::SearchError;
use crate::jobs::export::ExportError;
use crate::resume::loader::LoadError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Input(#[from] LoadError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Input(LoadError::UnsupportedFormat(_)) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                self.to_string(),
            ),
            AppError::Input(LoadError::Io(e)) => {
                tracing::error!("Resume read error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Failed to read the uploaded resume".to_string(),
                )
            }
            AppError::Input(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RESUME",
                e.to_string(),
            ),
            AppError::Search(SearchError::SearchUnavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SEARCH_UNAVAILABLE",
                self.to_string(),
            ),
            AppError::Search(e) => {
                tracing::error!("Search error: {e}");
                (StatusCode::BAD_GATEWAY, "SEARCH_FAILED", e.to_string())
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_FAILED",
                    "Failed to build the CSV export".to_string(),
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
