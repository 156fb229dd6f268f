//! LlmClient trait definition

use async_trait::async_trait;

use super::LlmError;

/// Stateless LLM client - each generation call is independent
///
/// This is the core abstraction over the two provider backends. A call
/// sends one composed prompt and returns the provider's generated text,
/// already trimmed of surrounding whitespace. Implementations do not
/// retry and do not fall back to another provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
