//! Chat domain actions - called directly from GraphQL resolvers.

pub mod history;
pub mod send_message;

pub use history::chat_history;
pub use send_message::{describe_failure, send_message};

/// Greeting returned by the `hello` query.
pub const GREETING: &str = "Hello from the GraphQL chat server!";
