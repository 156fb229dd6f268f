//! LLM client module
//!
//! Provider adapters used by ad-sheet generation. The active provider is
//! chosen once at construction from configuration; call sites only see the
//! [`LlmClient`] trait.

use std::sync::Arc;

use tracing::debug;

mod anthropic;
pub mod client;
mod error;
mod openai;

pub use anthropic::AnthropicClient;
pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;

use crate::config::{Provider, ResolvedLlmConfig};

/// Create an LLM client for the provider selected in config
pub fn create_client(config: &ResolvedLlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider {
        Provider::Openai => Ok(Arc::new(OpenAIClient::from_config(config)?)),
        Provider::Anthropic => Ok(Arc::new(AnthropicClient::from_config(config)?)),
    }
}
