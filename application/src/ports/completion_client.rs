//! Completion client port
//!
//! Defines the only I/O boundary of a duel: a text prompt goes out, a text
//! reply comes back.

use async_trait::async_trait;
use duel_domain::Model;
use thiserror::Error;

/// Errors raised when the completion service cannot produce a reply
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API key not found (set {0})")]
    MissingApiKey(String),

    #[error("No scripted replies left")]
    Exhausted,

    #[error("Other error: {0}")]
    Other(String),
}

/// A text-completion collaborator bound to one model
///
/// Implementations (adapters) live in the infrastructure layer. Use cases
/// await each call before issuing the next one.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Get the model this client talks to
    fn model(&self) -> &Model;

    /// Send a prompt and get the raw reply text
    async fn send(&self, prompt: &str) -> Result<String, TransportError>;
}
