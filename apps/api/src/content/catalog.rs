//! The static lesson table.
//!
//! Shipped as `data/lessons.json`, embedded at compile time and parsed once at
//! startup. Never mutated afterwards; handlers share it through `AppState`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LESSONS_JSON: &str = include_str!("../../data/lessons.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("lesson data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("subject '{0}' appears more than once")]
    DuplicateSubject(String),

    #[error("topic '{topic}' appears more than once under '{subject}'")]
    DuplicateTopic { subject: String, topic: String },

    #[error("topic '{topic}' under '{subject}' is missing content, key concepts or examples")]
    IncompleteTopic { subject: String, topic: String },
}

/// One prewritten lesson, keyed by its subject and `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicEntry {
    pub name: String,
    pub content: String,
    pub key_concepts: Vec<String>,
    pub examples: Vec<String>,
    pub resources: Option<Vec<String>>,
    #[serde(rename = "youtubeLinks")]
    pub video_links: Option<Vec<String>>,
    pub step_by_step_notes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub topics: Vec<TopicEntry>,
}

/// Subjects and topics in the order the data file lists them.
#[derive(Debug, Clone)]
pub struct Catalog {
    subjects: Vec<Subject>,
}

impl Catalog {
    /// Parses the lesson table compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(LESSONS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let subjects: Vec<Subject> = serde_json::from_str(json)?;

        let mut seen_subjects = HashSet::new();
        for subject in &subjects {
            if !seen_subjects.insert(subject.name.as_str()) {
                return Err(CatalogError::DuplicateSubject(subject.name.clone()));
            }
            let mut seen_topics = HashSet::new();
            for topic in &subject.topics {
                if !seen_topics.insert(topic.name.as_str()) {
                    return Err(CatalogError::DuplicateTopic {
                        subject: subject.name.clone(),
                        topic: topic.name.clone(),
                    });
                }
                if topic.content.trim().is_empty()
                    || topic.key_concepts.is_empty()
                    || topic.examples.is_empty()
                {
                    return Err(CatalogError::IncompleteTopic {
                        subject: subject.name.clone(),
                        topic: topic.name.clone(),
                    });
                }
            }
        }

        Ok(Self { subjects })
    }

    /// Exact, case-sensitive lookup of `subject` then `topic`.
    pub fn lookup(&self, subject: &str, topic: &str) -> Option<&TopicEntry> {
        self.subjects
            .iter()
            .find(|s| s.name == subject)?
            .topics
            .iter()
            .find(|t| t.name == topic)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject_names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }

    pub fn topic_count(&self) -> usize {
        self.subjects.iter().map(|s| s.topics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.subjects().len(), 13);
        assert!(catalog.topic_count() > 40);
    }

    #[test]
    fn test_subject_order_follows_data_file() {
        let names = Catalog::embedded().unwrap().subject_names();
        assert_eq!(names.first().map(String::as_str), Some("Mathematics"));
        assert_eq!(names.get(1).map(String::as_str), Some("Computer Science"));
        assert_eq!(names.last().map(String::as_str), Some("Advanced Physics"));
    }

    #[test]
    fn test_every_topic_has_core_fields() {
        let catalog = Catalog::embedded().unwrap();
        for subject in catalog.subjects() {
            for topic in &subject.topics {
                let entry = catalog.lookup(&subject.name, &topic.name).unwrap();
                assert!(!entry.content.is_empty(), "{}/{}", subject.name, topic.name);
                assert!(!entry.key_concepts.is_empty());
                assert!(!entry.examples.is_empty());
            }
        }
    }

    #[test]
    fn test_lookup_algebra() {
        let catalog = Catalog::embedded().unwrap();
        let algebra = catalog.lookup("Mathematics", "Algebra").unwrap();
        assert!(algebra
            .content
            .starts_with("Algebra is a fundamental branch of mathematics"));
        assert!(algebra
            .key_concepts
            .contains(&"Variables and Constants".to_string()));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.lookup("mathematics", "Algebra").is_none());
        assert!(catalog.lookup("Mathematics", "algebra").is_none());
    }

    #[test]
    fn test_lookup_topic_under_wrong_subject() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.lookup("Physics", "Algebra").is_none());
        assert!(catalog.lookup("Astrology", "Algebra").is_none());
    }

    #[test]
    fn test_duplicate_subject_rejected() {
        let json = r#"[
            {"name": "Art", "topics": []},
            {"name": "Art", "topics": []}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateSubject(name)) if name == "Art"
        ));
    }

    #[test]
    fn test_incomplete_topic_rejected() {
        let json = r#"[
            {"name": "Art", "topics": [
                {"name": "Color", "content": "", "keyConcepts": ["Hue"], "examples": ["Mix"]}
            ]}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::IncompleteTopic { .. })
        ));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"[
            {"name": "Art", "topics": [
                {"name": "Color", "content": "Color theory.", "keyConcepts": ["Hue"], "examples": ["Mix"]}
            ]}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let entry = catalog.lookup("Art", "Color").unwrap();
        assert!(entry.resources.is_none());
        assert!(entry.video_links.is_none());
        assert!(entry.step_by_step_notes.is_none());
    }
}
