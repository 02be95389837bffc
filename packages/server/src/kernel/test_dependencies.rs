// TestDependencies - mock implementations for testing
//
// Provides a scripted chat completion that can be injected into the app state
// or a GraphQLContext in tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseChatCompletion, ChatPrompt, CompletionError};

// =============================================================================
// Mock Chat Completion
// =============================================================================

/// One scripted provider outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Empty,
    Fail(CompletionError),
    Panic(String),
}

/// Arguments captured from a completion call
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub credential: String,
    pub prompt: ChatPrompt,
}

/// Scripted completion provider.
///
/// Replies are consumed in order; once the queue is empty every call answers
/// with `"mock reply to: <message>"`.
#[derive(Clone, Default)]
pub struct MockChatCompletion {
    replies: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl MockChatCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: &str) -> Self {
        self.push(MockReply::Text(text.to_string()))
    }

    /// Answer with no content (e.g. a null message body).
    pub fn with_empty_response(self) -> Self {
        self.push(MockReply::Empty)
    }

    pub fn with_error(self, error: CompletionError) -> Self {
        self.push(MockReply::Fail(error))
    }

    /// Panic inside the provider call (simulates a crash escaping the executor).
    pub fn with_panic(self, message: &str) -> Self {
        self.push(MockReply::Panic(message.to_string()))
    }

    fn push(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseChatCompletion for MockChatCompletion {
    async fn complete(
        &self,
        credential: &str,
        prompt: &ChatPrompt,
    ) -> Result<Option<String>, CompletionError> {
        // Record the call
        self.calls.lock().unwrap().push(CompletionCall {
            credential: credential.to_string(),
            prompt: prompt.clone(),
        });

        let next = {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                None
            } else {
                Some(replies.remove(0))
            }
        };

        match next {
            Some(MockReply::Text(text)) => Ok(Some(text)),
            Some(MockReply::Empty) => Ok(None),
            Some(MockReply::Fail(error)) => Err(error),
            Some(MockReply::Panic(message)) => panic!("{}", message),
            None => Ok(Some(format!("mock reply to: {}", prompt.user))),
        }
    }
}
