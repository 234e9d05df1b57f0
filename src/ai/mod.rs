//! LLM (`OpenAI`) API integration.

pub mod client;

pub use client::{CompletionApi, DEFAULT_MODEL, LlmClient};
