//! Anthropic Claude API client implementation
//!
//! Implements the LlmClient trait for Anthropic's Messages API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{LlmClient, LlmError};
use crate::config::ResolvedLlmConfig;

/// Anthropic Claude API client
pub struct AnthropicClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a new client from resolved configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &ResolvedLlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Transport)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the Messages API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [{"role": "user", "content": prompt}],
        })
    }

    /// Pull the generated text out of the response envelope
    fn extract_content(envelope: AnthropicResponse) -> Result<String, LlmError> {
        let block = envelope
            .content
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no content blocks".to_string()))?;

        let text = block
            .text
            .ok_or_else(|| LlmError::InvalidResponse("Content block contained no text".to_string()))?;

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "generate: calling Anthropic");
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.build_request_body(prompt);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", self.api_key.clone())
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status, "generate: Anthropic returned non-success status");
            return Err(LlmError::Provider { status, body });
        }

        let text = response.text().await.map_err(LlmError::Transport)?;
        let envelope: AnthropicResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::InvalidResponse(format!("Malformed Anthropic response: {}", e)))?;

        Self::extract_content(envelope)
    }
}

// Anthropic API response types

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(default)]
    text: Option<String>,
}
