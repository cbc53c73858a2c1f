//! Completion service configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completions endpoint settings.
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://api.openai.com"
/// api_key_env = "OPENAI_API_KEY"
/// max_tokens = 1024
/// temperature = 0.7
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL, without the `/v1/chat/completions` path.
    pub base_url: String,
    /// Max tokens per reply.
    pub max_tokens: u32,
    /// Sampling temperature; omitted from requests when unset.
    pub temperature: Option<f32>,
    /// Per-request timeout in seconds; no timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 1024,
            temperature: None,
            timeout_secs: Some(120),
        }
    }
}

impl FileProviderConfig {
    /// The configured key, or the value of the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
