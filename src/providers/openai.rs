//! OpenAI provider adapter and builder.

use serde_json::Value;

use super::adapter::ProviderAdapter;
use crate::client::{ChatClient, ClientConfig};
use crate::error::LlmError;
use crate::standards::openai;
use crate::types::{ChatMessage, ChatOutcome, ChatRequest, HttpConfig};

/// OpenAI adapter
///
/// OpenAI is the reference dialect, so everything delegates straight to the
/// shared standard.
#[derive(Debug, Clone, Default)]
pub struct OpenAiAdapter;

impl OpenAiAdapter {
    /// Create a new OpenAI adapter
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for OpenAiAdapter {
    fn provider_id(&self) -> &'static str {
        "openai"
    }

    fn default_base_url(&self) -> &'static str {
        "https://api.openai.com/v1"
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

/// Builder for an OpenAI-backed [`ChatClient`]
#[derive(Debug, Clone, Default)]
pub struct OpenAiBuilder {
    api_key: String,
    base_url: Option<String>,
    model: Option<String>,
    http_config: Option<HttpConfig>,
}

impl OpenAiBuilder {
    /// Create a new OpenAI builder
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
        let adapter = OpenAiAdapter::new();
        let model = self.model.ok_or_else(|| {
            LlmError::ConfigurationError("Model is required".to_string())
        })?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_identity() {
        let adapter = OpenAiAdapter::new();
        assert_eq!(adapter.provider_id(), "openai");
        assert_eq!(adapter.default_base_url(), "https://api.openai.com/v1");
    }

    #[test]
    fn builder_requires_api_key_and_model() {
        let result = OpenAiBuilder::new().model("gpt-4o-mini").build();
        assert!(matches!(result, Err(LlmError::ConfigurationError(_))));

        let result = OpenAiBuilder::new().api_key("sk-test").build();
        assert!(matches!(result, Err(LlmError::ConfigurationError(_))));
    }

    #[test]
    fn builder_defaults_base_url() {
        let client = OpenAiBuilder::new()
            .api_key("sk-test")
            .model("gpt-4o-mini")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.openai.com/v1");
        assert_eq!(client.model(), "gpt-4o-mini");
    }
}
