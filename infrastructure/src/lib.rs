//! Infrastructure layer for ai-duel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDuelConfig, FileModelsConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use providers::{OpenAiCompletionClient, ScriptedCompletionClient};
