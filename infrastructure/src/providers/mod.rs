//! Completion client adapters
//!
//! - [`OpenAiCompletionClient`]: OpenAI-compatible chat-completions endpoint over HTTP
//! - [`ScriptedCompletionClient`]: replays canned replies from memory or a fixture file

pub mod openai;
pub mod scripted;

pub use openai::OpenAiCompletionClient;
pub use scripted::ScriptedCompletionClient;
