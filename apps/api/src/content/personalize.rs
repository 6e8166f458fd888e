//! Personalized lesson — synthesized entirely from the learner parameters.
//! No table lookup and no external call; identical input gives identical output.

use serde::Serialize;

use crate::content::lesson::INTERACTIVE_ELEMENTS;
use crate::content::LearnerParams;

const ESTIMATED_MINUTES: u32 = 20;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedContent {
    pub title: String,
    pub description: String,
    pub content: String,
    pub key_concepts: Vec<String>,
    pub examples: Vec<String>,
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
}

pub fn khan_academy_search(subject: &str, topic: &str) -> String {
    format!(
        "https://www.khanacademy.org/search?page_search_query={}",
        urlencoding::encode(&format!("{subject} {topic}"))
    )
}

fn wikipedia_article(subject: &str, topic: &str) -> String {
    format!(
        "https://www.wikipedia.org/wiki/{}",
        urlencoding::encode(&format!("{subject}_{topic}"))
    )
}

fn youtube_search(subject: &str, topic: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(&format!("{subject} {topic} tutorial"))
    )
}

fn coursera_search(subject: &str, topic: &str) -> String {
    format!(
        "https://www.coursera.org/search?query={}",
        urlencoding::encode(&format!("{subject} {topic}"))
    )
}

pub fn personalize(params: &LearnerParams) -> PersonalizedContent {
    let LearnerParams {
        subject,
        topic,
        difficulty,
        learning_style,
        education_level,
        grade,
    } = params;

    let content = format!(
        "Welcome to your personalized {topic} lesson in {subject}! This content has been tailored \
specifically for your learning style ({learning_style}) and education level ({education_level}).\n\n\
**What You'll Learn:**\n\
- Core concepts of {topic}\n\
- Practical applications in real-world scenarios\n\
- Step-by-step problem-solving approaches\n\
- Interactive exercises and examples\n\n\
**Learning Objectives:**\n\
1. Understand the fundamental principles of {topic}\n\
2. Apply {topic} concepts to solve problems\n\
3. Develop critical thinking skills in {subject}\n\
4. Build confidence in {topic} applications\n\n\
**Estimated Time:** {ESTIMATED_MINUTES} minutes\n\n\
**Difficulty Level:** {difficulty}\n\
**Learning Style:** {learning_style}\n\
**Education Level:** {education_level}\n\
**Grade:** {grade}"
    );

    PersonalizedContent {
        title: format!("{subject}: {topic}"),
        description: format!("Personalized {topic} lesson in {subject} for {grade} students"),
        content,
        key_concepts: vec![
            format!("Introduction to {topic}"),
            "Core principles and fundamentals".to_string(),
            "Practical applications".to_string(),
            "Problem-solving strategies".to_string(),
            "Advanced concepts and extensions".to_string(),
        ],
        examples: vec![
            format!("Basic Example: Simple {topic} application"),
            format!("Intermediate Example: Moderate complexity {topic} problem"),
            format!("Advanced Example: Complex {topic} scenario"),
        ],
        interactive_elements: INTERACTIVE_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        next_steps: format!(
            "Complete the practice exercises, review the key concepts, and explore related topics in {subject}."
        ),
        ai_insights: format!(
            "Based on your {learning_style} learning style and {education_level} level, this content has been optimized for maximum effectiveness."
        ),
        prerequisites: vec![
            format!("Basic understanding of {subject} fundamentals"),
            "Familiarity with mathematical concepts".to_string(),
            "Willingness to learn and practice".to_string(),
        ],
        learning_objectives: vec![
            format!("Master the core concepts of {topic}"),
            format!("Apply {topic} principles in practical scenarios"),
            format!("Develop problem-solving skills in {subject}"),
            format!("Build confidence in {topic} applications"),
        ],
        real_world_applications: vec![
            "Engineering and Architecture".to_string(),
            "Finance and Economics".to_string(),
            "Scientific Research".to_string(),
            "Technology and Computing".to_string(),
        ],
        assessment_questions: vec![
            format!("What are the main principles of {topic}?"),
            format!("How would you apply {topic} in a real-world scenario?"),
            format!("What are the key differences between basic and advanced {topic} concepts?"),
            format!("Can you explain the relationship between {topic} and other {subject} concepts?"),
        ],
        external_resources: vec![
            khan_academy_search(subject, topic),
            wikipedia_article(subject, topic),
            youtube_search(subject, topic),
        ],
        video_links: vec![
            khan_academy_search(subject, topic),
            youtube_search(subject, topic),
            coursera_search(subject, topic),
        ],
        practice_problems: vec![
            format!("Practice Problem 1: Basic {topic} application"),
            format!("Practice Problem 2: Intermediate {topic} challenge"),
            format!("Practice Problem 3: Advanced {topic} problem-solving"),
            format!("Real-world Application: {topic} in {subject} context"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LearnerInput;

    fn params(subject: &str, topic: &str) -> LearnerParams {
        LearnerInput {
            subject: Some(subject.to_string()),
            topic: Some(topic.to_string()),
            ..Default::default()
        }
        .require_subject_and_topic()
        .unwrap()
    }

    #[test]
    fn test_title_is_subject_and_topic() {
        for (subject, topic) in [
            ("Biology", "Genetics"),
            ("Computer Science", "Data Structures"),
            ("Música", "Teoría"),
        ] {
            let doc = personalize(&params(subject, topic));
            assert_eq!(doc.title, format!("{subject}: {topic}"));
        }
    }

    #[test]
    fn test_external_resources_encode_inputs() {
        let doc = personalize(&params("Biology", "Genetics"));
        assert_eq!(
            doc.external_resources[0],
            "https://www.khanacademy.org/search?page_search_query=Biology%20Genetics"
        );
        assert_eq!(
            doc.external_resources[1],
            "https://www.wikipedia.org/wiki/Biology_Genetics"
        );
        assert_eq!(
            doc.external_resources[2],
            "https://www.youtube.com/results?search_query=Biology%20Genetics%20tutorial"
        );
        assert_eq!(
            doc.video_links[2],
            "https://www.coursera.org/search?query=Biology%20Genetics"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let doc = personalize(&params("C++ & Rust", "Q/A?"));
        let url = &doc.external_resources[0];
        let query = url.split_once('=').unwrap().1;
        assert_eq!(query, "C%2B%2B%20%26%20Rust%20Q%2FA%3F");
    }

    #[test]
    fn test_same_input_same_output() {
        let a = serde_json::to_value(personalize(&params("Physics", "Optics"))).unwrap();
        let b = serde_json::to_value(personalize(&params("Physics", "Optics"))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_content_echoes_parameters() {
        let params = LearnerInput {
            subject: Some("Chemistry".to_string()),
            topic: Some("Bonding".to_string()),
            difficulty: Some("advanced".to_string()),
            learning_style: Some("kinesthetic".to_string()),
            education_level: Some("college".to_string()),
            grade: Some("Year 1".to_string()),
        }
        .with_defaults();
        let doc = personalize(&params);

        assert!(doc.content.contains("**Difficulty Level:** advanced"));
        assert!(doc.content.contains("learning style (kinesthetic)"));
        assert!(doc.content.contains("**Grade:** Year 1"));
        assert!(doc.content.contains("**Estimated Time:** 20 minutes"));
        assert_eq!(
            doc.description,
            "Personalized Bonding lesson in Chemistry for Year 1 students"
        );
        assert_eq!(doc.assessment_questions.len(), 4);
        assert_eq!(doc.practice_problems.len(), 4);
    }
}
