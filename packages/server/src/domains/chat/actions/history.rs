use crate::domains::chat::data::ChatMessageData;

/// Past exchanges. Nothing is stored, so this is always empty.
pub fn chat_history() -> Vec<ChatMessageData> {
    Vec::new()
}
