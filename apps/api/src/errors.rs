use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are flat (`{"error": "..."}`) because the browser client reads
/// `error` as a string.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Content not found")]
    ContentNotFound { available_subjects: Vec<String> },

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Malformed query string: {0}")]
    MalformedQuery(#[from] QueryRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::ContentNotFound { available_subjects } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Content not found",
                    "availableSubjects": available_subjects,
                    "message": "Please select from available subjects and topics"
                })),
            )
                .into_response(),
            AppError::MalformedBody(rejection) => {
                tracing::debug!("Rejected request body: {rejection}");
                (
                    rejection.status(),
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response()
            }
            AppError::MalformedQuery(rejection) => {
                tracing::debug!("Rejected query string: {rejection}");
                (
                    rejection.status(),
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response()
            }
        }
    }
}
