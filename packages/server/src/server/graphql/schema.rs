//! GraphQL schema definition.

use juniper::{EmptySubscription, RootNode};
use tracing::{debug, info};

use super::context::GraphQLContext;
use crate::domains::chat::actions as chat_actions;
use crate::domains::chat::data::{ChatMessageData, SendMessageResponse};

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Constant greeting, usable as a liveness probe through GraphQL
    fn hello(ctx: &GraphQLContext) -> Option<String> {
        debug!(request_id = %ctx.execution.request_id, "hello query");
        Some(chat_actions::GREETING.to_string())
    }

    /// Previous exchanges (history is not stored; always empty)
    fn chat_history(ctx: &GraphQLContext) -> Option<Vec<Option<ChatMessageData>>> {
        debug!(request_id = %ctx.execution.request_id, "chatHistory query");
        Some(chat_actions::chat_history().into_iter().map(Some).collect())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Send a message and receive a generated reply
    async fn send_message(ctx: &GraphQLContext, message: String) -> SendMessageResponse {
        info!(
            request_id = %ctx.execution.request_id,
            "sendMessage mutation"
        );
        chat_actions::send_message(&message, ctx.environment(), ctx.chat.as_ref()).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
