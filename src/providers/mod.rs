//! Provider implementations.
//!
//! Each provider contributes an adapter (the request/response shaping
//! strategy) and a builder that assembles a ready-to-use client.

pub mod adapter;
pub mod deepseek;
pub mod openai;

pub use adapter::ProviderAdapter;
pub use deepseek::{DeepSeekAdapter, DeepSeekBuilder};
pub use openai::{OpenAiAdapter, OpenAiBuilder};
