//! Axum route handlers for the counselor chat.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::counselor::counsel;
use crate::counselor::models::{Capabilities, ChatRequest, ChatResult};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/chatbot
pub async fn handle_capabilities() -> Json<Capabilities> {
    Json(Capabilities {
        message: "AI Educational Counselor API is running",
        capabilities: [
            "Study guidance",
            "Career advice",
            "Subject help",
            "Learning strategies",
        ],
    })
}

/// POST /api/chatbot
///
/// Always 200 once `message` is present; callers detect degraded service by
/// the `error` field in the body.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResult>, AppError> {
    let Json(request) = payload?;

    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let result = counsel(
        state.chat.as_ref(),
        &message,
        request.context,
        request.user_profile.unwrap_or_default(),
    )
    .await;

    Ok(Json(result))
}
