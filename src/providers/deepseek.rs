//! Deepseek provider adapter and builder.
//!
//! Deepseek's API is fully OpenAI-compatible; the response additionally
//! carries `prompt_cache_hit_tokens`/`prompt_cache_miss_tokens` counters in
//! `usage`, which the shared response types already decode.

use serde_json::Value;

use super::adapter::ProviderAdapter;
use crate::client::{ChatClient, ClientConfig};
use crate::error::LlmError;
use crate::standards::openai;
use crate::types::{ChatMessage, ChatOutcome, ChatRequest, HttpConfig};

/// Deepseek model constants
pub mod models {
    /// General-purpose conversational model
    pub const CHAT: &str = "deepseek-chat";

    /// Reasoning model
    pub const REASONER: &str = "deepseek-reasoner";
}

/// Deepseek adapter
#[derive(Debug, Clone, Default)]
pub struct DeepSeekAdapter;

impl DeepSeekAdapter {
    /// Create a new Deepseek adapter
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for DeepSeekAdapter {
    fn provider_id(&self) -> &'static str {
        "deepseek"
    }

    fn default_base_url(&self) -> &'static str {
        "https://api.deepseek.com/v1"
    }

    fn chat_request_from_messages(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatRequest, LlmError> {
        openai::request_from_messages(model, messages)
    }

    fn chat_request_from_user_system(
        &self,
        model: &str,
        user_message: &str,
        system_message: &str,
    ) -> Result<ChatRequest, LlmError> {
        openai::request_from_user_system(model, user_message, system_message)
    }

    fn parse_chat_response(&self, raw: &Value) -> Result<ChatOutcome, LlmError> {
        openai::parse_chat_outcome(raw)
    }

    fn clone_adapter(&self) -> Box<dyn ProviderAdapter> {
        Box::new(self.clone())
    }
}

/// Builder for a Deepseek-backed [`ChatClient`]
///
/// Defaults the base URL to the public Deepseek endpoint and the model to
/// [`models::CHAT`].
#[derive(Debug, Clone, Default)]
pub struct DeepSeekBuilder {
    api_key: String,
    base_url: Option<String>,
    model: Option<String>,
    http_config: Option<HttpConfig>,
}

impl DeepSeekBuilder {
    /// Create a new Deepseek builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set a custom base URL (optional)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the default model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set HTTP configuration
    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = Some(http_config);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ChatClient, LlmError> {
        let adapter = DeepSeekAdapter::new();
        let model = self.model.unwrap_or_else(|| models::CHAT.to_string());
        let base_url = self
            .base_url
            .unwrap_or_else(|| adapter.default_base_url().to_string());

        let mut config = ClientConfig::new(adapter.provider_id(), &self.api_key, &base_url)
            .with_model(&model);
        if let Some(http_config) = self.http_config {
            config = config.with_http_config(http_config);
        }

        ChatClient::new(config, Box::new(adapter))
    }
}
