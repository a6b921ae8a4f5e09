//! # charsiu
//!
//! A small unified chat-completion client for OpenAI-compatible providers.
//!
//! One request/response cycle per call: the provider adapter shapes the JSON
//! payload, the executor POSTs it, and the raw reply is normalized into a
//! single [`ChatOutcome`](types::ChatOutcome): a completion or a
//! provider-reported error. Transport and decode failures surface as
//! [`LlmError`] instead, so callers only branch on outcomes the API actually
//! produced.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use charsiu::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     let client = DeepSeekBuilder::new()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let outcome = client
//!         .chat("Explain borrowing in one sentence.", "You are a Rust tutor.")
//!         .await?;
//!
//!     match outcome {
//!         ChatOutcome::Success { content, .. } => println!("{content}"),
//!         ChatOutcome::Failure { error } => {
//!             eprintln!("provider error: {:?}", error.message)
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod executors;
pub mod providers;
pub mod standards;
pub mod types;

pub use client::{ChatClient, ClientConfig};
pub use error::LlmError;

/// Commonly used items, re-exported for glob import.
pub mod prelude {
    pub use crate::client::{ChatClient, ClientConfig};
    pub use crate::error::LlmError;
    pub use crate::providers::{DeepSeekBuilder, OpenAiBuilder};
    pub use crate::types::{
        ChatCompletionResponse, ChatMessage, ChatOutcome, ChatRequest, ErrorPayload, HttpConfig,
        MessageRole, Usage,
    };
}
