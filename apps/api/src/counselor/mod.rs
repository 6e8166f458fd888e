// AI educational counselor: a chat proxy to the configured LLM provider.
// Provider failures never reach the caller as an error status; they produce a
// canned reply with `error` set. All LLM calls go through llm_client.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod prompts;

use chrono::{SecondsFormat, Utc};
use tracing::warn;

use crate::counselor::models::{ChatResult, UserProfile};
use crate::llm_client::ChatProvider;

pub const DEFAULT_CONTEXT: &str = "general";
pub const FALLBACK_ERROR: &str = "AI service temporarily unavailable, using fallback response";

/// Asks the provider for a reply to `message`, degrading to a canned reply on
/// any provider failure.
pub async fn counsel(
    provider: &dyn ChatProvider,
    message: &str,
    context: Option<String>,
    profile: UserProfile,
) -> ChatResult {
    let prompt = prompts::build_user_prompt(message, context.as_deref(), &profile);
    let outcome = provider.complete(prompts::COUNSELOR_SYSTEM, &prompt).await;

    let (response, model, error) = match outcome {
        Ok(text) => (text, Some(provider.model().to_string()), None),
        Err(e) => {
            warn!("Counselor provider call failed, using fallback: {e}");
            (
                fallback::fallback_for(message).to_string(),
                None,
                Some(FALLBACK_ERROR.to_string()),
            )
        }
    };

    ChatResult {
        response,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        context: context
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTEXT.to_string()),
        user_profile: profile,
        model,
        error,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{CannedProvider, UnconfiguredProvider};
    use super::*;

    #[tokio::test]
    async fn test_success_returns_provider_text_verbatim() {
        let provider = CannedProvider("  Try spaced repetition.\n");
        let result = counsel(&provider, "How do I memorize?", None, UserProfile::default()).await;

        assert_eq!(result.response, "  Try spaced repetition.\n");
        assert_eq!(result.model.as_deref(), Some("canned-model"));
        assert!(result.error.is_none());
        assert_eq!(result.context, "general");
    }

    #[tokio::test]
    async fn test_failure_uses_generic_fallback() {
        let result = counsel(
            &UnconfiguredProvider,
            "How do I plan revision?",
            Some("educational guidance".to_string()),
            UserProfile::default(),
        )
        .await;

        assert_eq!(result.response, fallback::GENERIC_FALLBACK);
        assert_eq!(result.error.as_deref(), Some(FALLBACK_ERROR));
        assert!(result.model.is_none());
        assert_eq!(result.context, "educational guidance");
    }

    #[tokio::test]
    async fn test_failure_uses_keyword_fallback() {
        let result = counsel(
            &UnconfiguredProvider,
            "Teach me machine learning",
            None,
            UserProfile::default(),
        )
        .await;

        assert_ne!(result.response, fallback::GENERIC_FALLBACK);
        assert!(result.response.starts_with("Machine learning"));
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn test_profile_is_echoed() {
        let profile = UserProfile {
            grade: Some("Grade 11".to_string()),
            ..Default::default()
        };
        let result = counsel(&CannedProvider("ok"), "hi", None, profile.clone()).await;
        assert_eq!(result.user_profile, profile);
    }

    #[tokio::test]
    async fn test_timestamp_is_utc_millis() {
        let result = counsel(&CannedProvider("ok"), "hi", None, UserProfile::default()).await;
        assert!(result.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
        // 2026-01-01T00:00:00.000Z
        assert_eq!(result.timestamp.len(), 24);
    }
}
