//! GraphQL data types for the chat domain.

pub mod message;
pub mod response;

pub use message::*;
pub use response::*;
