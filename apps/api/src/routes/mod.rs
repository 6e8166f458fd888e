pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers as content;
use crate::counselor::handlers as counselor;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Counselor chat
        .route(
            "/api/chatbot",
            get(counselor::handle_capabilities).post(counselor::handle_chat),
        )
        // Lesson content
        .route("/api/educational-content", get(content::handle_get_lesson))
        .route("/api/subjects", get(content::handle_list_subjects))
        .route(
            "/api/personalize-content",
            post(content::handle_personalize),
        )
        .with_state(state)
}
