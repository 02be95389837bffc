// Chat completion implementations
//
// Infrastructure implementations of BaseChatCompletion.
// Business logic (what to prompt for) lives in the chat domain.

use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use anyhow::bail;
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};

use super::{BaseChatCompletion, ChatPrompt, CompletionError};
use crate::config::Config;

/// Which completion backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAI,
    Echo,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "echo" => Ok(Self::Echo),
            other => bail!("unknown chat provider: {}", other),
        }
    }
}

/// Build the completion dependency selected by configuration.
pub fn create_chat_completion(config: &Config) -> Arc<dyn BaseChatCompletion> {
    match config.chat_provider {
        ProviderKind::OpenAI => {
            let mut completion = OpenAIChatCompletion::new();
            if let Some(url) = &config.openai_base_url {
                completion = completion.with_base_url(url.clone());
            }
            Arc::new(completion)
        }
        ProviderKind::Echo => Arc::new(EchoChatCompletion),
    }
}

// =============================================================================
// OpenAI
// =============================================================================

/// OpenAI-backed completions.
///
/// The HTTP client is built on first use and reused afterwards. A call with a
/// different credential gets a fresh, uncached client.
#[derive(Default)]
pub struct OpenAIChatCompletion {
    base_url: Option<String>,
    client: OnceLock<OpenAIClient>,
}

impl OpenAIChatCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    fn build_client(&self, credential: &str) -> OpenAIClient {
        let client = OpenAIClient::new(credential);
        match &self.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        }
    }

    fn client_for(&self, credential: &str) -> OpenAIClient {
        let cached = self.client.get_or_init(|| {
            tracing::debug!("Creating OpenAI client");
            self.build_client(credential)
        });

        if cached.api_key() == credential {
            cached.clone()
        } else {
            self.build_client(credential)
        }
    }
}

#[async_trait]
impl BaseChatCompletion for OpenAIChatCompletion {
    async fn complete(
        &self,
        credential: &str,
        prompt: &ChatPrompt,
    ) -> Result<Option<String>, CompletionError> {
        let client = self.client_for(credential);

        let request = ChatRequest::new(prompt.model.clone())
            .message(Message::system(prompt.system.clone()))
            .message(Message::user(prompt.user.clone()))
            .temperature(prompt.temperature)
            .output_limit(prompt.max_tokens);

        tracing::info!(model = %prompt.model, "Calling OpenAI API");

        let response = client.chat_completion(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %prompt.model, "OpenAI API call failed");
            CompletionError::from(e)
        })?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI usage"
            );
        }

        Ok(response.content.filter(|text| !text.trim().is_empty()))
    }
}

impl From<OpenAIError> for CompletionError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Auth(msg) => Self::Auth(msg),
            OpenAIError::QuotaExceeded(msg) => Self::QuotaExceeded(msg),
            OpenAIError::RateLimited(msg) => Self::RateLimited(msg),
            // Untagged failures fall back to message matching
            other => Self::classify(other.to_string()),
        }
    }
}

// =============================================================================
// Echo (local development)
// =============================================================================

/// Answers without network access by quoting the user's message back.
pub struct EchoChatCompletion;

#[async_trait]
impl BaseChatCompletion for EchoChatCompletion {
    async fn complete(
        &self,
        _credential: &str,
        prompt: &ChatPrompt,
    ) -> Result<Option<String>, CompletionError> {
        Ok(Some(format!(
            "You said: \"{}\". This is a test response.",
            prompt.user
        )))
    }
}
