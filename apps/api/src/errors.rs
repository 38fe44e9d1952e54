use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::charts::ChartError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The body is always `{"error": "<message>"}`; the web page reads that one field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    /// A model call failed or returned something unusable. The payload is the
    /// user-facing message; the cause is logged where it happened.
    #[error("Model error: {0}")]
    Llm(String),

    #[error("Chart rendering failed: {0}")]
    Chart(#[from] ChartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::PdfExtraction(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Llm(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Chart(e) => {
                tracing::error!("Chart error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render chart.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
