//! Application layer for ai-duel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DuelParams, ValidationParams};
pub use ports::{
    completion_client::{CompletionClient, TransportError},
    progress::{DuelProgressNotifier, NoProgress},
};
pub use use_cases::generate_question::{GenerateError, GenerateQuestionUseCase};
pub use use_cases::run_duel::{RunDuelError, RunDuelUseCase};
pub use use_cases::validate_question::{
    ValidateError, ValidateQuestionInput, ValidateQuestionUseCase,
};
