// Prompt text for the counselor chat.

use crate::counselor::models::{Goals, UserProfile};

pub const COUNSELOR_SYSTEM: &str = "You are an AI Educational Counselor. \
Provide helpful, comprehensive advice for students. Your responses should be:

- Clear and well-structured
- Practical and actionable
- Encouraging and supportive
- Complete without being cut off
- Focused on the student's specific question

Use bullet points or numbered lists when helpful. Keep responses informative but concise.";

/// Builds the user turn: the quoted question, then whatever profile and
/// context the client supplied.
pub fn build_user_prompt(message: &str, context: Option<&str>, profile: &UserProfile) -> String {
    let mut prompt = format!(
        "Student Question: \"{message}\"\n\n\
Please provide a comprehensive, helpful response with practical advice and actionable steps."
    );

    if !profile.is_empty() {
        prompt.push_str("\n\nStudent profile:");
        let fields = [
            ("Education level", profile.education_level.clone()),
            ("Grade", profile.grade.clone()),
            ("Learning style", profile.learning_style.clone()),
            ("Subjects", profile.subjects.as_ref().map(|s| s.join(", "))),
            ("Interests", profile.interests.as_ref().map(|i| i.join(", "))),
            ("Goals", profile.goals.as_ref().map(Goals::joined)),
        ];
        for (label, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                prompt.push_str(&format!("\n- {label}: {value}"));
            }
        }
    }

    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("\n\nConversation context: {context}"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_prompt_quotes_question() {
        let prompt = build_user_prompt("How do I study?", None, &UserProfile::default());
        assert!(prompt.starts_with("Student Question: \"How do I study?\""));
        assert!(!prompt.contains("Student profile"));
        assert!(!prompt.contains("Conversation context"));
    }

    #[test]
    fn test_profile_lists_present_fields_only() {
        let profile = UserProfile {
            grade: Some("Grade 10".to_string()),
            subjects: Some(vec!["mathematics".to_string(), "physics".to_string()]),
            ..Default::default()
        };
        let prompt = build_user_prompt("Help", Some("educational guidance"), &profile);
        assert!(prompt.contains("- Grade: Grade 10"));
        assert!(prompt.contains("- Subjects: mathematics, physics"));
        assert!(!prompt.contains("Education level"));
        assert!(prompt.ends_with("Conversation context: educational guidance"));
    }

    #[test]
    fn test_profile_renders_goal_list_and_interests() {
        let profile = UserProfile {
            interests: Some(vec!["mathematics".to_string(), "computer_science".to_string()]),
            goals: Some(Goals::Many(vec![
                "Academic Excellence".to_string(),
                "Career Preparation".to_string(),
            ])),
            ..Default::default()
        };
        let prompt = build_user_prompt("Help", None, &profile);
        assert!(prompt.contains("- Interests: mathematics, computer_science"));
        assert!(prompt.contains("- Goals: Academic Excellence, Career Preparation"));
    }

    #[test]
    fn test_system_prompt_sets_counselor_role() {
        assert!(COUNSELOR_SYSTEM.starts_with("You are an AI Educational Counselor."));
        assert!(COUNSELOR_SYSTEM.contains("Practical and actionable"));
    }
}
