// src/services/assistant.rs
use crate::message::{ChatRequest, ChatResponse};

pub const PLACEHOLDER_CONVERSATION_ID: &str = "demo";
pub const PLACEHOLDER_MESSAGE: &str = "AI Assistant dalam development";
pub const PLACEHOLDER_SUGGESTIONS: [&str; 2] = ["Lihat dashboard", "Analisis penjualan"];

/// Reply for the chat endpoint while the assistant is still in development.
/// The request is accepted but never inspected.
pub fn generate_reply(_request: &ChatRequest) -> ChatResponse {
    ChatResponse {
        conversation_id: PLACEHOLDER_CONVERSATION_ID.to_string(),
        message: PLACEHOLDER_MESSAGE.to_string(),
        suggestions: PLACEHOLDER_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reply_ignores_request_contents() {
        let empty = ChatRequest::default();
        let with_text: ChatRequest =
            serde_json::from_value(json!({ "text": "hello", "history": [1, 2, 3] })).unwrap();

        assert_eq!(generate_reply(&empty), generate_reply(&with_text));
    }

    #[test]
    fn reply_carries_placeholder_suggestions() {
        let reply = generate_reply(&ChatRequest::default());
        assert_eq!(reply.conversation_id, "demo");
        assert_eq!(reply.suggestions, vec!["Lihat dashboard", "Analisis penjualan"]);
    }
}
