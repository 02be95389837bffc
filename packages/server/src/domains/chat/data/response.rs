//! Result object returned by the `sendMessage` mutation.

use serde::{Deserialize, Serialize};

/// Outcome of sending a chat message.
///
/// Every failure is reported here with `success: false` and an empty
/// `response`; the mutation itself never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "Outcome of sending a chat message")]
pub struct SendMessageResponse {
    pub success: bool,

    /// Human-readable status
    pub message: String,

    /// Generated reply, empty on failure
    pub response: String,
}

impl SendMessageResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "ok".to_string(),
            response: response.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            message: reason.into(),
            response: String::new(),
        }
    }
}
