//! Chat response types and the unified outcome.

use serde::{Deserialize, Serialize};

use super::chat::ChatMessage;

/// Cached-token breakdown nested inside [`Usage`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PromptTokensDetails {
    /// Tokens served from the provider's prompt cache
    #[serde(default)]
    pub cached_tokens: u32,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Usage {
    /// Tokens consumed by the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens produced by the completion
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens for the round trip
    #[serde(default)]
    pub total_tokens: u32,
    /// Cached-token breakdown (OpenAI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens_details: Option<PromptTokensDetails>,
    /// Prompt-cache hit counter (Deepseek)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_cache_hit_tokens: Option<u32>,
    /// Prompt-cache miss counter (Deepseek)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_cache_miss_tokens: Option<u32>,
}

/// One completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    /// Position in the choices array
    #[serde(default)]
    pub index: u32,
    /// The generated message
    pub message: ChatMessage,
    /// Why generation stopped (e.g. "stop", "length")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Provider-specific log-probability blob, kept opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<serde_json::Value>,
}

/// A successful chat-completion response.
///
/// Scalar metadata fields default when a provider omits them; the shape
/// varies slightly across OpenAI-compatible APIs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[serde(default)]
    pub id: String,
    /// Object type discriminator (e.g. "chat.completion")
    #[serde(default)]
    pub object: String,
    /// Creation time, epoch seconds
    #[serde(default)]
    pub created: u64,
    /// Model that produced the completion
    #[serde(default)]
    pub model: String,
    /// Completion choices, never empty on a well-formed success
    pub choices: Vec<Choice>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Backend configuration identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,
}

/// Error payload decoded from the provider's `error` envelope.
///
/// Any of the string fields may be absent depending on the provider, and
/// `code` is normalized from either a JSON string or number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorPayload {
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
    /// Error category (e.g. "invalid_request_error")
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    /// Provider error code
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<String>,
    /// Offending parameter, kept opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<serde_json::Value>,
}

// Some providers send `code` as a bare number.
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Unified outcome of one chat call.
///
/// A provider that answers at the transport level either succeeded or
/// reported an error envelope; both are ordinary values here. Transport and
/// decode failures never reach this type, they surface as
/// [`LlmError`](crate::error::LlmError) instead.
///
/// # Examples
///
/// ```rust
/// use charsiu::types::ChatOutcome;
///
/// fn handle(outcome: ChatOutcome) {
///     match outcome {
///         ChatOutcome::Success { content, .. } => println!("{content}"),
///         ChatOutcome::Failure { error } => {
///             eprintln!("{}", error.message.as_deref().unwrap_or("unknown error"));
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// The provider returned a completion
    Success {
        /// Content of the first choice's message
        content: String,
        /// The full decoded response
        response: ChatCompletionResponse,
    },
    /// The provider returned an error envelope
    Failure {
        /// The decoded error payload
        error: ErrorPayload,
    },
}

impl ChatOutcome {
    /// Whether this outcome is a completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Content of the first choice, if this is a success
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Success { content, .. } => Some(content),
            Self::Failure { .. } => None,
        }
    }

    /// The full decoded response, if this is a success
    pub fn response(&self) -> Option<&ChatCompletionResponse> {
        match self {
            Self::Success { response, .. } => Some(response),
            Self::Failure { .. } => None,
        }
    }

    /// The error payload, if this is a failure
    pub fn error(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// The provider's error message, if this is a failure that carried one
    pub fn error_message(&self) -> Option<&str> {
        self.error().and_then(|e| e.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_decodes_deepseek_cache_counters() {
        let json = serde_json::json!({
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15,
            "prompt_cache_hit_tokens": 8,
            "prompt_cache_miss_tokens": 2
        });
        let usage: Usage = serde_json::from_value(json).unwrap();
        assert_eq!(usage.total_tokens, 15);
        assert_eq!(usage.prompt_cache_hit_tokens, Some(8));
        assert_eq!(usage.prompt_tokens_details, None);
    }

    #[test]
    fn response_tolerates_missing_metadata() {
        let json = serde_json::json!({
            "choices": [{
                "message": {"role": "assistant", "content": "hi"}
            }]
        });
        let response: ChatCompletionResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.id, "");
        assert_eq!(response.choices[0].message.content, "hi");
        assert_eq!(response.choices[0].finish_reason, None);
    }

    #[test]
    fn error_payload_accepts_numeric_code() {
        let json = serde_json::json!({"message": "bad gateway", "type": null, "code": 502});
        let payload: ErrorPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.code.as_deref(), Some("502"));
        assert_eq!(payload.error_type, None);
    }

    #[test]
    fn outcome_accessors_are_exclusive() {
        let failure = ChatOutcome::Failure {
            error: ErrorPayload {
                message: Some("bad key".to_string()),
                ..Default::default()
            },
        };
        assert!(!failure.is_success());
        assert_eq!(failure.content(), None);
        assert_eq!(failure.response(), None);
        assert_eq!(failure.error_message(), Some("bad key"));
    }
}
