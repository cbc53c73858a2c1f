//! OpenAI-compatible chat-completions provider
//!
//! Sends each prompt as a single user message to
//! `{base_url}/v1/chat/completions` and returns the first choice's content.

mod client;
mod types;

pub use client::OpenAiCompletionClient;
