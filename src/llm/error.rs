//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
///
/// Upstream non-success statuses and network faults are distinct so the
/// surface layer can log the diagnostic detail while returning a generic
/// message. No variant is retried anywhere; retry policy belongs to
/// callers.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Upstream HTTP status, when the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}
