//! GraphQL data types for chat history entries.

use serde::{Deserialize, Serialize};

/// GraphQL-friendly representation of a past exchange
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(name = "ChatMessage", description = "A past message and the reply it received")]
pub struct ChatMessageData {
    pub id: String,

    /// What the user sent
    pub message: String,

    /// What the assistant answered
    pub response: String,

    /// When the exchange happened (ISO 8601)
    pub timestamp: String,
}
