//! Executors layer.
//!
//! HTTP orchestration that wires provider adapters to endpoints. Chat is the
//! only capability this library exposes.

pub mod chat;

pub use chat::{ChatExecutor, HttpChatExecutor, CHAT_COMPLETIONS_PATH};
