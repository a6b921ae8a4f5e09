//! Chat message and request types.

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Message role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

/// A single message in a conversation.
///
/// Both fields are required; construction rejects blank content. The same
/// type describes request messages and the message inside a response choice,
/// which share the wire shape `{"role": "...", "content": "..."}`.
///
/// # Examples
///
/// ```rust
/// use charsiu::types::ChatMessage;
///
/// let msg = ChatMessage::user("Hello!").unwrap();
/// assert_eq!(msg.content, "Hello!");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Role of the sender
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl ChatMessage {
    /// Create a message with an explicit role.
    ///
    /// Fails with `LlmError::InvalidParameter` when `content` is blank.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Result<Self, LlmError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(LlmError::InvalidParameter(
                "Message content cannot be empty".to_string(),
            ));
        }
        Ok(Self { role, content })
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(MessageRole::User, content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(MessageRole::System, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(MessageRole::Assistant, content)
    }
}

/// A chat-completion request.
///
/// Serializes directly to the OpenAI-compatible wire shape. Optional
/// sampling parameters and the opaque prompt-cache hints are omitted from
/// the body when unset. Built once via [`ChatRequestBuilder`]; immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Conversation messages, in wire order
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Prompt-cache hit hint, passed through opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_cache_hit_tokens: Option<u32>,
    /// Prompt-cache miss hint, passed through opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_cache_miss_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a builder for the chat request
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::new()
    }
}

/// Chat request builder
///
/// `build` enforces the request invariants: a non-blank model and at least
/// one message.
#[derive(Debug, Clone, Default)]
pub struct ChatRequestBuilder {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    prompt_cache_hit_tokens: Option<u32>,
    prompt_cache_miss_tokens: Option<u32>,
}

impl ChatRequestBuilder {
    /// Create a new chat request builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Add a message to the request
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages to the request
    pub fn messages(mut self, messages: impl IntoIterator<Item = ChatMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate.
    ///
    /// Zero is rejected at `build` time.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the prompt-cache hit hint
    pub fn prompt_cache_hit_tokens(mut self, tokens: u32) -> Self {
        self.prompt_cache_hit_tokens = Some(tokens);
        self
    }

    /// Set the prompt-cache miss hint
    pub fn prompt_cache_miss_tokens(mut self, tokens: u32) -> Self {
        self.prompt_cache_miss_tokens = Some(tokens);
        self
    }

    /// Build the chat request
    pub fn build(self) -> Result<ChatRequest, LlmError> {
        if self.model.trim().is_empty() {
            return Err(LlmError::InvalidParameter(
                "Model must be set".to_string(),
            ));
        }
        if self.messages.is_empty() {
            return Err(LlmError::InvalidParameter(
                "At least one message is required".to_string(),
            ));
        }
        if self.max_tokens == Some(0) {
            return Err(LlmError::InvalidParameter(
                "Max tokens must be greater than 0".to_string(),
            ));
        }

        Ok(ChatRequest {
            model: self.model,
            messages: self.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            prompt_cache_hit_tokens: self.prompt_cache_hit_tokens,
            prompt_cache_miss_tokens: self.prompt_cache_miss_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_rejects_blank_content() {
        assert!(ChatMessage::user("   ").is_err());
        assert!(ChatMessage::system("").is_err());
        assert!(ChatMessage::user("hi").is_ok());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let msg = ChatMessage::system("be brief").unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be brief");
    }

    #[test]
    fn builder_requires_model_and_messages() {
        let err = ChatRequest::builder()
            .message(ChatMessage::user("hi").unwrap())
            .build();
        assert!(matches!(err, Err(LlmError::InvalidParameter(_))));

        let err = ChatRequest::builder().model("gpt-4o-mini").build();
        assert!(matches!(err, Err(LlmError::InvalidParameter(_))));
    }

    #[test]
    fn builder_rejects_zero_max_tokens() {
        let err = ChatRequest::builder()
            .model("gpt-4o-mini")
            .message(ChatMessage::user("hi").unwrap())
            .max_tokens(0)
            .build();
        assert!(matches!(err, Err(LlmError::InvalidParameter(_))));
    }

    #[test]
    fn builder_preserves_message_order() {
        let msgs = vec![
            ChatMessage::system("S").unwrap(),
            ChatMessage::user("U").unwrap(),
            ChatMessage::assistant("A").unwrap(),
        ];
        let request = ChatRequest::builder()
            .model("deepseek-chat")
            .messages(msgs.clone())
            .build()
            .unwrap();
        assert_eq!(request.messages, msgs);
    }

    #[test]
    fn unset_options_are_omitted_from_the_body() {
        let request = ChatRequest::builder()
            .model("gpt-4o-mini")
            .message(ChatMessage::user("hi").unwrap())
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("temperature"));
        assert!(!obj.contains_key("max_tokens"));
        assert!(!obj.contains_key("prompt_cache_hit_tokens"));
    }

    #[test]
    fn set_options_appear_in_the_body() {
        let request = ChatRequest::builder()
            .model("gpt-4o-mini")
            .message(ChatMessage::user("hi").unwrap())
            .temperature(0.7)
            .max_tokens(2000)
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 2000);
    }
}
