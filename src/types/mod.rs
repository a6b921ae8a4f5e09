//! Core value types shared across the library.

pub mod chat;
pub mod http;
pub mod response;

pub use chat::{ChatMessage, ChatRequest, ChatRequestBuilder, MessageRole};
pub use http::{HttpConfig, HttpConfigBuilder, DEFAULT_TIMEOUT};
pub use response::{
    ChatCompletionResponse, ChatOutcome, Choice, ErrorPayload, PromptTokensDetails, Usage,
};
