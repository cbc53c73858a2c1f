//! HTTP completion client for OpenAI-compatible endpoints

use super::types::{ChatCompletionResponse, ChatRequest};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use duel_application::ports::completion_client::{CompletionClient, TransportError};
use duel_domain::Model;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Completion client bound to one model on an OpenAI-compatible endpoint.
pub struct OpenAiCompletionClient {
    http: Client,
    model: Model,
    endpoint: String,
    api_key: String,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl OpenAiCompletionClient {
    /// Create a client from `[provider]` settings.
    ///
    /// Fails with [`TransportError::MissingApiKey`] when neither the config
    /// nor the configured environment variable supplies a key.
    pub fn new(model: Model, config: &FileProviderConfig) -> Result<Self, TransportError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| TransportError::MissingApiKey(config.api_key_env.clone()))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = Self::endpoint_for(&config.base_url);
        info!(model = %model, endpoint = %endpoint, "OpenAI-compatible client ready");

        Ok(Self {
            http,
            model,
            endpoint,
            api_key,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Same endpoint settings, different model.
    pub fn for_model(&self, model: Model) -> Self {
        Self {
            http: self.http.clone(),
            model,
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    fn endpoint_for(base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        format!("{}/v1/chat/completions", base)
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, prompt: &str) -> Result<String, TransportError> {
        let request =
            ChatRequest::for_prompt(&self.model, prompt, self.max_tokens, self.temperature);
        debug!(model = %self.model, chars = prompt.len(), "Sending chat completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        parsed.into_text().ok_or_else(|| {
            TransportError::InvalidResponse("response contained no message content".to_string())
        })
    }
}
