use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::kernel::ProviderKind;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Provider credential. Absence is reported per request, not at boot.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub chat_provider: ProviderKind,
    pub graphiql_enabled: bool,
    pub app_version: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            chat_provider: env::var("CHAT_PROVIDER")
                .unwrap_or_else(|_| "openai".to_string())
                .parse()
                .context("CHAT_PROVIDER must be one of: openai, echo")?,
            graphiql_enabled: match env::var("GRAPHIQL_ENABLED") {
                Ok(value) => parse_bool(&value).context("GRAPHIQL_ENABLED must be a boolean")?,
                Err(_) => cfg!(debug_assertions),
            },
            app_version: env::var("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean: {}", other),
    }
}
