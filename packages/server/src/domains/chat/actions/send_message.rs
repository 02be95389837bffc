//! Send a chat message to the completion provider.

use tracing::{info, warn};

use crate::domains::chat::data::SendMessageResponse;
use crate::kernel::{BaseChatCompletion, ChatPrompt, CompletionError, Environment};

/// Instruction sent ahead of every user message.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Answer the user's questions clearly and concisely.";

/// Upper bound on generated tokens.
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

pub const TEMPERATURE: f32 = 0.7;

/// Reply used when the provider succeeds without content.
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a reply.";

pub const EMPTY_MESSAGE: &str = "message must not be empty";
pub const MISSING_ENVIRONMENT: &str =
    "environment bindings were not passed to the request context";
pub const MISSING_CREDENTIAL: &str =
    "missing credential: OPENAI_API_KEY is not configured";

/// Send a user message and collapse every outcome into a `SendMessageResponse`.
///
/// Checks run in order: input, environment, credential, provider call.
pub async fn send_message(
    message: &str,
    environment: Option<&Environment>,
    chat: &dyn BaseChatCompletion,
) -> SendMessageResponse {
    let text = message.trim();
    if text.is_empty() {
        info!("Rejected empty chat message");
        return SendMessageResponse::failure(EMPTY_MESSAGE);
    }

    let Some(environment) = environment else {
        warn!("Request context has no environment bindings");
        return SendMessageResponse::failure(MISSING_ENVIRONMENT);
    };

    let Some(credential) = environment.credential() else {
        warn!("OPENAI_API_KEY not found in environment bindings");
        return SendMessageResponse::failure(MISSING_CREDENTIAL);
    };

    info!(
        message_length = message.len(),
        credential_length = credential.len(),
        "Sending chat message"
    );

    let prompt = ChatPrompt {
        model: environment.openai_model.clone(),
        system: SYSTEM_PROMPT.to_string(),
        user: message.to_string(),
        max_tokens: MAX_OUTPUT_TOKENS,
        temperature: TEMPERATURE,
    };

    match chat.complete(credential, &prompt).await {
        Ok(Some(reply)) => {
            info!(reply_length = reply.len(), "Chat reply generated");
            SendMessageResponse::ok(reply)
        }
        Ok(None) => {
            warn!("Provider returned no content, using fallback reply");
            SendMessageResponse::ok(FALLBACK_REPLY)
        }
        Err(error) => {
            warn!(error = %error, "Chat completion failed");
            SendMessageResponse::failure(describe_failure(&error))
        }
    }
}

/// User-facing text for a provider failure.
pub fn describe_failure(error: &CompletionError) -> String {
    match error {
        CompletionError::Auth(_) => {
            "The provider rejected the API key; check the OPENAI_API_KEY configuration".to_string()
        }
        CompletionError::QuotaExceeded(_) => {
            "The provider quota is exhausted; please try again later".to_string()
        }
        CompletionError::RateLimited(_) => {
            "The provider rate limit was reached; please retry shortly".to_string()
        }
        CompletionError::Unknown(details) => format!("Failed to generate a reply: {}", details),
    }
}
