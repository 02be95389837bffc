//! Environment bindings handed to every request.

use crate::config::Config;

/// Host-provided bindings visible to resolvers.
///
/// Resolvers read the provider credential through `openai_api_key` only,
/// never from the process environment directly.
#[derive(Clone, Default)]
pub struct Environment {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl Environment {
    pub fn from_config(config: &Config) -> Self {
        Self {
            openai_api_key: config.openai_api_key.clone(),
            openai_model: config.openai_model.clone(),
        }
    }

    /// The credential, if present and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_model", &self.openai_model)
            .finish()
    }
}
