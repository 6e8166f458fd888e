// Lesson content: the static lesson table, the lesson document built from it,
// and the fully templated personalized lesson. No LLM calls in this module.

pub mod catalog;
pub mod handlers;
pub mod lesson;
pub mod personalize;

use serde::Deserialize;

pub const DEFAULT_SUBJECT: &str = "Mathematics";
pub const DEFAULT_TOPIC: &str = "Algebra";
pub const DEFAULT_DIFFICULTY: &str = "intermediate";
pub const DEFAULT_LEARNING_STYLE: &str = "visual";
pub const DEFAULT_EDUCATION_LEVEL: &str = "high";
pub const DEFAULT_GRADE: &str = "Grade 10";

/// Learner parameters as they arrive on the wire, every field optional.
/// Used both as the lesson query string and the personalize request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerInput {
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub learning_style: Option<String>,
    pub education_level: Option<String>,
    pub grade: Option<String>,
}

/// Learner parameters after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerParams {
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
    pub learning_style: String,
    pub education_level: String,
    pub grade: String,
}

impl LearnerInput {
    /// Fills every missing or empty field with its default.
    pub fn with_defaults(self) -> LearnerParams {
        LearnerParams {
            subject: or_default(self.subject, DEFAULT_SUBJECT),
            topic: or_default(self.topic, DEFAULT_TOPIC),
            difficulty: or_default(self.difficulty, DEFAULT_DIFFICULTY),
            learning_style: or_default(self.learning_style, DEFAULT_LEARNING_STYLE),
            education_level: or_default(self.education_level, DEFAULT_EDUCATION_LEVEL),
            grade: or_default(self.grade, DEFAULT_GRADE),
        }
    }

    /// Like `with_defaults`, but `subject` and `topic` have no default and must
    /// contain something other than whitespace.
    pub fn require_subject_and_topic(self) -> Option<LearnerParams> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !present(&self.subject) || !present(&self.topic) {
            return None;
        }
        Some(self.with_defaults())
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
