//! Lesson document — a stored topic entry decorated with templated study aids.

use serde::Serialize;

use crate::content::catalog::TopicEntry;
use crate::content::personalize::khan_academy_search;
use crate::content::LearnerParams;

const ESTIMATED_MINUTES: u32 = 25;

pub const INTERACTIVE_ELEMENTS: [&str; 3] = [
    "Interactive Diagrams",
    "Step-by-step Solutions",
    "Progress Tracking",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDocument {
    pub title: String,
    pub description: String,
    pub content: String,
    pub examples: Vec<String>,
    pub key_concepts: Vec<String>,
    pub estimated_time: u32,
    pub difficulty: String,
    pub learning_style: String,
    pub education_level: String,
    pub grade: String,
    pub interactive_elements: Vec<String>,
    pub next_steps: String,
    pub ai_insights: String,
    pub prerequisites: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub real_world_applications: Vec<String>,
    pub assessment_questions: Vec<String>,
    pub external_resources: Vec<String>,
    pub video_links: Vec<String>,
    pub practice_problems: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_by_step_notes: Option<Vec<String>>,
}

/// Builds the lesson document for a looked-up entry.
///
/// Stored text passes through untouched; everything else is `topic`/`subject`
/// substituted into fixed sentences.
pub fn build_lesson(params: &LearnerParams, entry: &TopicEntry) -> LessonDocument {
    let LearnerParams {
        subject,
        topic,
        difficulty,
        learning_style,
        education_level,
        grade,
    } = params;

    LessonDocument {
        title: format!("{subject}: {topic}"),
        description: format!(
            "Comprehensive {topic} lesson in {subject} tailored for {grade} students"
        ),
        content: entry.content.clone(),
        examples: entry.examples.clone(),
        key_concepts: entry.key_concepts.clone(),
        estimated_time: ESTIMATED_MINUTES,
        difficulty: difficulty.clone(),
        learning_style: learning_style.clone(),
        education_level: education_level.clone(),
        grade: grade.clone(),
        interactive_elements: INTERACTIVE_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        next_steps: format!(
            "Complete the practice exercises and review the key concepts of {topic}."
        ),
        ai_insights: format!(
            "Based on your {learning_style} learning style, this content has been optimized for maximum effectiveness."
        ),
        prerequisites: vec![
            format!("Basic understanding of {subject} fundamentals"),
            "Familiarity with mathematical concepts".to_string(),
        ],
        learning_objectives: vec![
            format!("Master the core concepts of {topic}"),
            format!("Apply {topic} principles in practical scenarios"),
            format!("Develop problem-solving skills in {subject}"),
        ],
        real_world_applications: vec![
            "Engineering and Architecture".to_string(),
            "Finance and Economics".to_string(),
            "Scientific Research".to_string(),
        ],
        assessment_questions: vec![
            format!("What are the main principles of {topic}?"),
            format!("How would you apply {topic} in a real-world scenario?"),
            format!("What are the key differences between basic and advanced {topic} concepts?"),
        ],
        external_resources: entry.resources.clone().unwrap_or_default(),
        video_links: entry
            .video_links
            .clone()
            .unwrap_or_else(|| vec![khan_academy_search(subject, topic)]),
        practice_problems: vec![
            format!("Practice Problem 1: Basic {topic} application"),
            format!("Practice Problem 2: Intermediate {topic} challenge"),
            format!("Practice Problem 3: Advanced {topic} synthesis"),
        ],
        step_by_step_notes: entry.step_by_step_notes.clone(),
    }
}
