use serde::{Deserialize, Serialize};

/// What the browser knows about the student. Every field is optional and
/// absent fields are left out when echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Goals>,
}

/// The sign-up form stores a single goal; the dashboard chat sends a list.
/// Kept in whichever shape arrived so it echoes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Goals {
    One(String),
    Many(Vec<String>),
}

impl Goals {
    pub fn joined(&self) -> String {
        match self {
            Goals::One(goal) => goal.clone(),
            Goals::Many(goals) => goals.join(", "),
        }
    }
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub context: Option<String>,
    pub user_profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    pub response: String,
    pub timestamp: String,
    pub context: String,
    pub user_profile: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Capabilities {
    pub message: &'static str,
    pub capabilities: [&'static str; 4],
}
