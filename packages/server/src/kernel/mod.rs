//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::Environment;
pub use ai::{create_chat_completion, EchoChatCompletion, OpenAIChatCompletion, ProviderKind};
pub use test_dependencies::{MockChatCompletion, MockReply};
pub use traits::*;
