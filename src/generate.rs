//! Ad-sheet generation service
//!
//! Orchestrates skeleton lookup, prompt composition, and the provider
//! call. Inputs are pre-validated by the catalog layer; this service
//! trusts them and performs no retries and no provider fallback.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::Product;
use crate::llm::{LlmClient, LlmError};
use crate::prompts::{ComposeError, PromptComposer, TemplateRegistry};

/// Errors from a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Runs the generation pipeline against the configured provider
pub struct Generator {
    registry: TemplateRegistry,
    composer: PromptComposer,
    llm: Arc<dyn LlmClient>,
}

impl Generator {
    pub fn new(registry: TemplateRegistry, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            registry,
            composer: PromptComposer::new(),
            llm,
        }
    }

    /// Generate ad-sheet markdown for the given products
    ///
    /// Resolves the skeleton through the registry (the default fallback
    /// applies to unregistered pairs), composes the prompt, and returns
    /// the provider's extracted text unmodified.
    pub async fn generate(&self, products: &[Product], platform: &str, template: &str) -> Result<String, GenerateError> {
        let skeleton = self.registry.skeleton_for(platform, template);
        let prompt = self.composer.compose(products, platform, skeleton)?;

        debug!(
            platform,
            template,
            product_count = products.len(),
            prompt_len = prompt.len(),
            "generate: dispatching prompt"
        );

        let content = self.llm.generate(&prompt).await?;

        info!(platform, template, content_len = content.len(), "generate: content ready");
        Ok(content)
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }
}
