//! Configuration file loading for ai-duel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `AI_DUEL_` (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./duel.toml` or `./.duel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ai-duel/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDuelConfig, FileModelsConfig, FileOutputConfig, FileProviderConfig,
};
pub use loader::ConfigLoader;
