//! Client configuration and the public chat entry points.

use std::sync::{Mutex, MutexGuard};

use crate::error::LlmError;
use crate::executors::chat::{chat_completions_url, chat_headers, ChatExecutor, HttpChatExecutor};
use crate::providers::ProviderAdapter;
use crate::types::{ChatMessage, ChatOutcome, ChatRequest, HttpConfig};

/// Client configuration
///
/// Plain data validated once at client construction. The model recorded here
/// is the default; per-call overrides happen on the client's active model,
/// not on this struct.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Provider identifier
    pub provider_id: String,
    /// API key for authentication
    pub api_key: String,
    /// Base URL, joined with `/chat/completions` per request
    pub base_url: String,
    /// Default model
    pub model: String,
    /// HTTP timeout budgets
    pub http_config: HttpConfig,
}

impl ClientConfig {
    /// Create a new configuration
    pub fn new(provider_id: &str, api_key: &str, base_url: &str) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            model: String::new(),
            http_config: HttpConfig::default(),
        }
    }

    /// Set the default model
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set HTTP configuration
    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.provider_id.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "Provider ID cannot be empty".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(LlmError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "Model cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Chat client for one OpenAI-compatible provider.
///
/// Owns the shared HTTP transport and the provider adapter. The transport is
/// safe to share across concurrent calls; the model-override entry points
/// mutate the active model for their duration and must not run concurrently
/// on the same client (see [`ChatClient::chat_with_model`]).
///
/// # Examples
///
/// ```rust,no_run
/// use charsiu::prelude::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), LlmError> {
///     let client = DeepSeekBuilder::new().api_key("sk-...").build()?;
///     let outcome = client.chat("What is Rust?", "You are concise.").await?;
///     if let Some(content) = outcome.content() {
///         println!("{content}");
///     }
///     Ok(())
/// }
/// ```
pub struct ChatClient {
    config: ClientConfig,
    adapter: Box<dyn ProviderAdapter>,
    http_client: reqwest::Client,
    // Active model; overridable for the duration of one call.
    model: Mutex<String>,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("provider_id", &self.config.provider_id)
            .field("base_url", &self.config.base_url)
            .field("model", &self.model())
            .field("has_api_key", &(!self.config.api_key.is_empty()))
            .finish()
    }
}

impl ChatClient {
    /// Create a new client from a validated configuration and an adapter.
    pub fn new(config: ClientConfig, adapter: Box<dyn ProviderAdapter>) -> Result<Self, LlmError> {
        config.validate()?;
        let http_client = Self::build_http_client(&config.http_config)?;
        let model = Mutex::new(config.model.clone());
        Ok(Self {
            config,
            adapter,
            http_client,
            model,
        })
    }

    fn build_http_client(http_config: &HttpConfig) -> Result<reqwest::Client, LlmError> {
        reqwest::Client::builder()
            .connect_timeout(http_config.connect_timeout)
            .read_timeout(http_config.read_timeout)
            .timeout(http_config.total_timeout())
            .build()
            .map_err(|e| LlmError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
    }

    /// Get the provider ID
    pub fn provider_id(&self) -> &str {
        &self.config.provider_id
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the currently active model
    pub fn model(&self) -> String {
        self.lock_model().clone()
    }

    fn lock_model(&self) -> MutexGuard<'_, String> {
        // The slot only ever holds a model name; recover it even if a
        // previous holder panicked.
        self.model.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn override_model(&self, model: &str) -> ModelOverride<'_> {
        let previous = std::mem::replace(&mut *self.lock_model(), model.to_string());
        ModelOverride {
            slot: &self.model,
            previous: Some(previous),
        }
    }

    /// Chat with a user message and a system instruction.
    ///
    /// Blank inputs fail before any network activity.
    pub async fn chat(
        &self,
        user_message: &str,
        system_message: &str,
    ) -> Result<ChatOutcome, LlmError> {
        if user_message.trim().is_empty() {
            return Err(LlmError::InvalidParameter(
                "User message cannot be empty".to_string(),
            ));
        }
        if system_message.trim().is_empty() {
            return Err(LlmError::InvalidParameter(
                "System message cannot be empty".to_string(),
            ));
        }
        let request =
            self.adapter
                .chat_request_from_user_system(&self.model(), user_message, system_message)?;
        self.send(request).await
    }

    /// Chat with a custom message list.
    ///
    /// An empty list fails before any network activity.
    pub async fn chat_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatOutcome, LlmError> {
        if messages.is_empty() {
            return Err(LlmError::InvalidParameter(
                "Messages cannot be empty".to_string(),
            ));
        }
        let request = self.adapter.chat_request_from_messages(&self.model(), messages)?;
        self.send(request).await
    }

    /// Chat with a temporarily overridden model.
    ///
    /// The active model is swapped for this call and restored on every exit
    /// path, including errors. Two overriding calls running concurrently on
    /// the same client race on the active model; callers must serialize them.
    pub async fn chat_with_model(
        &self,
        user_message: &str,
        system_message: &str,
        model: &str,
    ) -> Result<ChatOutcome, LlmError> {
        if model.trim().is_empty() {
            return Err(LlmError::InvalidParameter(
                "Model cannot be empty".to_string(),
            ));
        }
        let _restore = self.override_model(model);
        self.chat(user_message, system_message).await
    }

    /// Chat with a custom message list and a temporarily overridden model.
    ///
    /// Same override semantics as [`ChatClient::chat_with_model`].
    pub async fn chat_with_messages_and_model(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
    ) -> Result<ChatOutcome, LlmError> {
        if model.trim().is_empty() {
            return Err(LlmError::InvalidParameter(
                "Model cannot be empty".to_string(),
            ));
        }
        let _restore = self.override_model(model);
        self.chat_with_messages(messages).await
    }

    /// Send an already-built request.
    ///
    /// Transport failures, non-success statuses, empty bodies, and
    /// undecodable bodies are hard errors; a provider-reported error envelope
    /// is an ordinary [`ChatOutcome::Failure`].
    pub async fn send(&self, request: ChatRequest) -> Result<ChatOutcome, LlmError> {
        let executor = HttpChatExecutor {
            provider_id: self.config.provider_id.clone(),
            http_client: self.http_client.clone(),
            adapter: self.adapter.clone(),
            url: chat_completions_url(&self.config.base_url),
            headers: chat_headers(&self.config.api_key)?,
        };
        executor.execute(request).await
    }
}

/// Restores the previously active model when dropped, so overrides unwind on
/// every exit path.
struct ModelOverride<'a> {
    slot: &'a Mutex<String>,
    previous: Option<String>,
}

impl Drop for ModelOverride<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = previous;
        }
    }
}
