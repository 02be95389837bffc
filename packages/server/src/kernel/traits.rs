// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for and how to present failures lives in the chat domain.
//
// Naming convention: Base* for trait names (e.g., BaseChatCompletion)

use async_trait::async_trait;
use thiserror::Error;

// =============================================================================
// Chat Completion Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

/// A single-turn completion request: one system instruction, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub model: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Tagged provider failure.
///
/// Produced by the provider integration so callers switch on a stable tag
/// instead of error text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("provider rejected the credential: {0}")]
    Auth(String),

    #[error("provider quota exhausted: {0}")]
    QuotaExceeded(String),

    #[error("provider rate limit reached: {0}")]
    RateLimited(String),

    #[error("{0}")]
    Unknown(String),
}

impl CompletionError {
    /// Best-effort classification of an untagged failure by its message text.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        if lower.contains("api key") {
            Self::Auth(message)
        } else if lower.contains("quota") {
            Self::QuotaExceeded(message)
        } else if lower.contains("rate limit") {
            Self::RateLimited(message)
        } else {
            Self::Unknown(message)
        }
    }
}

#[async_trait]
pub trait BaseChatCompletion: Send + Sync {
    /// Complete a prompt using the given credential.
    ///
    /// Returns `Ok(None)` when the provider answered without any content.
    async fn complete(
        &self,
        credential: &str,
        prompt: &ChatPrompt,
    ) -> Result<Option<String>, CompletionError>;
}
