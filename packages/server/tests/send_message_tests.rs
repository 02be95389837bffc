//! Integration tests for the sendMessage mutation.
//!
//! Executed straight against the schema; the provider is always the mock.

mod common;

use crate::common::{TestHarness, SEND_MESSAGE, TEST_API_KEY};
use chat_server::kernel::{CompletionError, MockChatCompletion};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn send_message_returns_generated_reply(ctx: &mut TestHarness) {
    let client = ctx.graphql();

    let data = client
        .query(r#"mutation { sendMessage(message: "hi") { success message response } }"#)
        .await;

    assert_eq!(data["sendMessage"]["success"], true);
    assert_eq!(data["sendMessage"]["message"], "ok");
    assert_eq!(data["sendMessage"]["response"], "mock reply to: hi");

    let calls = ctx.chat.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].credential, TEST_API_KEY);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn send_message_accepts_variables(ctx: &mut TestHarness) {
    let result = ctx
        .graphql()
        .execute_with_vars(SEND_MESSAGE, vars!("message" => "What is Rust?"))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.get("sendMessage.success"), true);
    assert_eq!(
        result.get("sendMessage.response"),
        "mock reply to: What is Rust?"
    );
}

#[tokio::test]
async fn empty_and_blank_messages_are_rejected() {
    let harness = TestHarness::new();
    let client = harness.graphql();

    for message in ["", "   "] {
        let data = client
            .query_with_vars(SEND_MESSAGE, vars!("message" => message))
            .await;

        assert_eq!(data["sendMessage"]["success"], false);
        assert_eq!(data["sendMessage"]["response"], "");
        assert!(data["sendMessage"]["message"]
            .as_str()
            .unwrap()
            .contains("empty"));
    }

    assert_eq!(harness.chat.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_is_reported_not_thrown() {
    let harness = TestHarness::new().without_credential();

    let result = harness
        .graphql()
        .execute_with_vars(SEND_MESSAGE, vars!("message" => "hi"))
        .await;

    // The failure is data, not a GraphQL error
    assert!(result.is_ok());
    assert_eq!(result.get("sendMessage.success"), false);
    assert_eq!(result.get("sendMessage.response"), "");

    let message = result.get("sendMessage.message");
    let message = message.as_str().unwrap();
    assert!(message.contains("credential"));
    assert!(message.contains("configured"));
    assert_eq!(harness.chat.call_count(), 0);
}

#[tokio::test]
async fn provider_without_content_gets_placeholder() {
    let harness = TestHarness::with_chat(MockChatCompletion::new().with_empty_response());

    let data = harness
        .graphql()
        .query_with_vars(SEND_MESSAGE, vars!("message" => "hi"))
        .await;

    assert_eq!(data["sendMessage"]["success"], true);
    assert!(!data["sendMessage"]["response"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn provider_failures_become_failed_responses() {
    let cases = [
        (CompletionError::Auth("Incorrect API key provided".into()), "API key"),
        (CompletionError::QuotaExceeded("insufficient_quota".into()), "quota"),
        (CompletionError::RateLimited("too many requests".into()), "rate limit"),
    ];

    for (error, expected) in cases {
        let harness = TestHarness::with_chat(MockChatCompletion::new().with_error(error));

        let result = harness
            .graphql()
            .execute_with_vars(SEND_MESSAGE, vars!("message" => "hi"))
            .await;

        assert!(result.is_ok());
        assert_eq!(result.get("sendMessage.success"), false);
        assert_eq!(result.get("sendMessage.response"), "");
        assert!(result
            .get("sendMessage.message")
            .as_str()
            .unwrap()
            .contains(expected));
    }
}
