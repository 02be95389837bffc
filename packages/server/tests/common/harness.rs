//! Test harness for integration testing.
//!
//! Wires the real router and schema to a scripted completion provider, so no
//! test ever reaches the network.

use std::sync::Arc;

use axum::Router;
use chat_server::kernel::{BaseChatCompletion, Environment, MockChatCompletion};
use chat_server::server::{build_app, AxumAppState};
use test_context::AsyncTestContext;

use super::{GraphQLClient, HttpClient};

pub const TEST_API_KEY: &str = "test-openai-key";
pub const TEST_VERSION: &str = "0.0.0-test";

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Scripted provider shared by every client built from this harness.
    pub chat: MockChatCompletion,
    /// OpenAI API key bound into the environment (None = unconfigured)
    pub openai_api_key: Option<String>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness with a configured credential and a default mock provider.
    pub fn new() -> Self {
        Self::with_chat(MockChatCompletion::new())
    }

    /// Harness with a scripted provider.
    pub fn with_chat(chat: MockChatCompletion) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            chat,
            openai_api_key: Some(TEST_API_KEY.to_string()),
        }
    }

    /// Same harness, but the host never configured a credential.
    pub fn without_credential(mut self) -> Self {
        self.openai_api_key = None;
        self
    }

    pub fn environment(&self) -> Environment {
        Environment {
            openai_api_key: self.openai_api_key.clone(),
            openai_model: "gpt-3.5-turbo".to_string(),
        }
    }

    fn chat_dependency(&self) -> Arc<dyn BaseChatCompletion> {
        Arc::new(self.chat.clone())
    }

    /// Application state as the server would build it.
    pub fn app_state(&self) -> AxumAppState {
        AxumAppState::new(
            Some(self.environment()),
            self.chat_dependency(),
            true,
            TEST_VERSION,
        )
    }

    pub fn router(&self) -> Router {
        build_app(self.app_state())
    }

    /// Get an HTTP client driving the full router.
    pub fn http(&self) -> HttpClient {
        HttpClient::new(self.router())
    }

    /// Get a GraphQL client for this harness.
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(Some(self.environment()), self.chat_dependency())
    }
}
