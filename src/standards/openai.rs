//! OpenAI chat-completion wire standard.
//!
//! Request building and response parsing shared by every provider that
//! speaks the OpenAI dialect. Adapters delegate here and layer their own
//! divergences on top when a provider drifts from the standard.

use serde_json::Value;

use crate::error::LlmError;
use crate::types::{ChatCompletionResponse, ChatMessage, ChatOutcome, ChatRequest, ErrorPayload};

/// Build a chat request carrying the given messages in order.
pub fn request_from_messages(
    model: &str,
    messages: Vec<ChatMessage>,
) -> Result<ChatRequest, LlmError> {
    if messages.is_empty() {
        return Err(LlmError::InvalidParameter(
            "Messages cannot be empty".to_string(),
        ));
    }
    ChatRequest::builder().model(model).messages(messages).build()
}

/// Build a two-message chat request: system instruction first, user second.
pub fn request_from_user_system(
    model: &str,
    user_message: &str,
    system_message: &str,
) -> Result<ChatRequest, LlmError> {
    let system = ChatMessage::system(system_message).map_err(|_| {
        LlmError::InvalidParameter("System message cannot be empty".to_string())
    })?;
    let user = ChatMessage::user(user_message).map_err(|_| {
        LlmError::InvalidParameter("User message cannot be empty".to_string())
    })?;
    ChatRequest::builder()
        .model(model)
        .message(system)
        .message(user)
        .build()
}

/// Parse a raw response body into the unified outcome.
///
/// A top-level `error` key means the provider reported an error; that is an
/// ordinary [`ChatOutcome::Failure`]. Anything else must decode as the
/// success shape with at least one choice; an empty `choices` array is a
/// contract violation and fails hard rather than guessing a default.
pub fn parse_chat_outcome(raw: &Value) -> Result<ChatOutcome, LlmError> {
    if let Some(error) = raw.get("error") {
        let error: ErrorPayload = serde_json::from_value(error.clone())?;
        return Ok(ChatOutcome::Failure { error });
    }

    let response: ChatCompletionResponse = serde_json::from_value(raw.clone())
        .map_err(|e| LlmError::ParseError(format!("Malformed chat completion response: {e}")))?;

    let content = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| {
            LlmError::ParseError("Chat completion response contained no choices".to_string())
        })?;

    Ok(ChatOutcome::Success { content, response })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn request_from_messages_preserves_order_and_count() {
        let messages = vec![
            ChatMessage::system("S").unwrap(),
            ChatMessage::user("U").unwrap(),
            ChatMessage::assistant("A").unwrap(),
        ];
        let request = request_from_messages("deepseek-chat", messages.clone()).unwrap();
        assert_eq!(request.model, "deepseek-chat");
        assert_eq!(request.messages, messages);
    }

    #[test]
    fn request_from_messages_rejects_empty_input() {
        let result = request_from_messages("deepseek-chat", vec![]);
        assert!(matches!(result, Err(LlmError::InvalidParameter(_))));
    }

    #[test]
    fn request_from_user_system_puts_system_first() {
        let request = request_from_user_system("gpt-4o-mini", "U", "S").unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, "S");
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(request.messages[1].content, "U");
    }

    #[test]
    fn request_from_user_system_rejects_blank_input() {
        assert!(request_from_user_system("gpt-4o-mini", "  ", "S").is_err());
        assert!(request_from_user_system("gpt-4o-mini", "U", "").is_err());
    }

    #[test]
    fn parse_success_extracts_first_choice_content() {
        let raw = serde_json::json!({
            "id": "x",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hi"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
        });
        let outcome = parse_chat_outcome(&raw).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.content(), Some("hi"));
        let response = outcome.response().unwrap();
        assert_eq!(response.usage.as_ref().unwrap().total_tokens, 2);
    }

    #[test]
    fn parse_error_envelope_yields_failure() {
        let raw = serde_json::json!({
            "error": {"message": "bad key", "type": "auth", "code": "401"}
        });
        let outcome = parse_chat_outcome(&raw).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.error_message(), Some("bad key"));
        assert_eq!(outcome.error().unwrap().code.as_deref(), Some("401"));
    }

    #[test]
    fn parse_empty_choices_is_a_hard_error() {
        let raw = serde_json::json!({"id": "x", "choices": []});
        let result = parse_chat_outcome(&raw);
        assert!(matches!(result, Err(LlmError::ParseError(_))));
    }

    #[test]
    fn parse_malformed_success_shape_is_a_hard_error() {
        let raw = serde_json::json!({"id": "x"});
        let result = parse_chat_outcome(&raw);
        assert!(matches!(result, Err(LlmError::ParseError(_))));
    }
}
