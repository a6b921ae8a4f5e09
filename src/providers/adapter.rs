//! Provider adapter trait.
//!
//! One implementation per supported provider, selected when the client is
//! constructed. Both current providers emit the same OpenAI-shaped wire
//! format; they stay separate implementations so either can diverge without
//! touching the other.

use serde_json::Value;

use crate::error::LlmError;
use crate::types::{ChatMessage, ChatOutcome, ChatRequest};

/// Provider adapter trait
///
/// Covers the provider-specific half of a chat call: shaping the request
/// payload for the provider and interpreting the raw JSON it answers with.
pub trait ProviderAdapter: Send + Sync + std::fmt::Debug {
    /// Provider identifier
    fn provider_id(&self) -> &'static str;

    /// The provider's canonical API base URL
    fn default_base_url(&self) -> &'static str;

    /// Build a chat request carrying the given messages in order, tagged
    /// with the given model. Fails on empty input.
    fn chat_request_from_messages(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatRequest, LlmError>;

    /// Build a two-message chat request: system instruction first, user
    /// message second. Fails when either string is blank.
    fn chat_request_from_user_system(
        &self,
        model: &str,
        user_message: &str,
        system_message: &str,
    ) -> Result<ChatRequest, LlmError>;

    /// Interpret a raw response body.
    ///
    /// A provider-reported error envelope becomes [`ChatOutcome::Failure`];
    /// a body that matches neither the error nor the success shape is a
    /// decode error.
    fn parse_chat_response(&self, raw: &Value) -> Result<ChatOutcome, LlmError>;

    /// Clone the adapter
    fn clone_adapter(&self) -> Box<dyn ProviderAdapter>;
}

impl Clone for Box<dyn ProviderAdapter> {
    fn clone(&self) -> Self {
        self.clone_adapter()
    }
}
