//! Axum route handlers for lesson content.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::content::lesson::{build_lesson, LessonDocument};
use crate::content::personalize::{personalize, PersonalizedContent};
use crate::content::LearnerInput;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub topics: Vec<String>,
}

/// GET /api/educational-content
///
/// Looks up `subject`/`topic` in the lesson table (defaults: Mathematics/Algebra)
/// and returns the decorated lesson, or 404 with the valid subjects.
pub async fn handle_get_lesson(
    State(state): State<AppState>,
    query: Result<Query<LearnerInput>, QueryRejection>,
) -> Result<Json<LessonDocument>, AppError> {
    let Query(input) = query?;
    let params = input.with_defaults();

    let entry = state
        .catalog
        .lookup(&params.subject, &params.topic)
        .ok_or_else(|| {
            debug!("No lesson for {}/{}", params.subject, params.topic);
            AppError::ContentNotFound {
                available_subjects: state.catalog.subject_names(),
            }
        })?;

    Ok(Json(build_lesson(&params, entry)))
}

/// GET /api/subjects
pub async fn handle_list_subjects(State(state): State<AppState>) -> Json<Vec<SubjectSummary>> {
    Json(
        state
            .catalog
            .subjects()
            .iter()
            .map(|s| SubjectSummary {
                subject: s.name.clone(),
                topics: s.topics.iter().map(|t| t.name.clone()).collect(),
            })
            .collect(),
    )
}

/// POST /api/personalize-content
pub async fn handle_personalize(
    payload: Result<Json<LearnerInput>, JsonRejection>,
) -> Result<Json<PersonalizedContent>, AppError> {
    let Json(input) = payload?;

    let params = input
        .require_subject_and_topic()
        .ok_or_else(|| AppError::Validation("Subject and topic are required".to_string()))?;

    Ok(Json(personalize(&params)))
}
