//! Chat executor.
//!
//! Owns one HTTP round trip: build the URL and headers, serialize the
//! request, POST it, and hand the decoded body to the provider adapter.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::error::LlmError;
use crate::providers::ProviderAdapter;
use crate::types::{ChatOutcome, ChatRequest};

/// Fixed path suffix appended to the configured base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Join the base URL and the chat-completions path, trimming a trailing
/// slash so the result never contains `//`.
pub fn chat_completions_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
}

/// Bearer-auth headers for an OpenAI-compatible endpoint.
pub fn chat_headers(api_key: &str) -> Result<HeaderMap, LlmError> {
    let mut headers = HeaderMap::new();
    let auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|e| LlmError::ConfigurationError(format!("Invalid API key: {e}")))?;
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Executes chat requests against a provider.
#[async_trait::async_trait]
pub trait ChatExecutor: Send + Sync {
    /// Perform one request/response cycle.
    async fn execute(&self, request: ChatRequest) -> Result<ChatOutcome, LlmError>;
}

/// HTTP-backed [`ChatExecutor`]
///
/// Holds a clone of the shared `reqwest::Client`, so constructing one per
/// call is cheap; the connection pool lives in the client.
pub struct HttpChatExecutor {
    pub provider_id: String,
    pub http_client: reqwest::Client,
    pub adapter: Box<dyn ProviderAdapter>,
    pub url: String,
    pub headers: HeaderMap,
}

#[async_trait::async_trait]
impl ChatExecutor for HttpChatExecutor {
    async fn execute(&self, request: ChatRequest) -> Result<ChatOutcome, LlmError> {
        let body = serde_json::to_value(&request)?;
        debug!(provider = %self.provider_id, url = %self.url, model = %request.model, "dispatching chat request");

        let response = self
            .http_client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(provider = %self.provider_id, status = status.as_u16(), "chat request failed");
            return Err(LlmError::ApiError {
                code: status.as_u16(),
                message: text.clone(),
                details: serde_json::from_str(&text).ok(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;
        if text.trim().is_empty() {
            return Err(LlmError::HttpError("Empty response body".to_string()));
        }

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| LlmError::ParseError(format!("Failed to parse response JSON: {e}")))?;
        self.adapter.parse_chat_response(&json)
    }
}
