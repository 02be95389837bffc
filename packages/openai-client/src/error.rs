//! Error types for OpenAI client.

use serde::Deserialize;
use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The API rejected the credential (401, `invalid_api_key`)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The account has no remaining quota (`insufficient_quota`)
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Too many requests (429 without a quota code)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error body returned by the OpenAI API.
///
/// `{"error": {"message": "...", "type": "...", "code": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl OpenAIError {
    /// Classify a non-2xx response from its status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);

        let message = match &detail {
            Some(d) if !d.message.is_empty() => d.message.clone(),
            _ if body.trim().is_empty() => format!("HTTP {}", status),
            _ => body.trim().to_string(),
        };

        let code = detail
            .as_ref()
            .and_then(|d| d.code.as_deref().or(d.error_type.as_deref()))
            .unwrap_or_default();

        match (status, code) {
            (_, "insufficient_quota") => Self::QuotaExceeded(message),
            (401, _) | (_, "invalid_api_key") => Self::Auth(message),
            (429, _) | (_, "rate_limit_exceeded") => Self::RateLimited(message),
            _ => Self::Api { status, message },
        }
    }
}
