//! Error handling for the library.
//!
//! A single error enum covers configuration, validation, transport, and
//! decoding failures. Provider-reported errors are not represented here:
//! an API that answers with an error envelope still produced a parseable
//! response, which surfaces as `ChatOutcome::Failure` instead.

use thiserror::Error;

/// Errors that can occur when talking to an LLM provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport failure (connection, timeout, empty body)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The provider answered with a non-success HTTP status
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Response body text, if any
        message: String,
        /// Decoded response body, when it was valid JSON
        details: Option<serde_json::Value>,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A caller-supplied argument was invalid
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The client configuration was invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_json_error_converts_to_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let llm_err: LlmError = json_err.into();
        assert!(matches!(llm_err, LlmError::JsonError(_)));
    }

    #[test]
    fn api_error_display_includes_status() {
        let err = LlmError::ApiError {
            code: 500,
            message: "boom".to_string(),
            details: None,
        };
        assert_eq!(err.to_string(), "API error 500: boom");
    }
}
