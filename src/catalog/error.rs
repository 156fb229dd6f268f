//! Catalog error taxonomy
//!
//! Each variant maps to one class of failure: validation problems callers
//! can fix, lookups that found nothing, provider failures, and storage
//! failures. The HTTP layer translates these into status codes.

use thiserror::Error;
use uuid::Uuid;

use crate::generate::GenerateError;
use crate::llm::LlmError;
use crate::prompts::ComposeError;
use crate::store::StoreError;
use crate::uploads::UploadError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid platform: {platform}. Available options: {valid:?}")]
    UnknownPlatform {
        platform: String,
        valid: Vec<String>,
    },

    #[error("Invalid template for {platform}: {template}. Available options: {valid:?}")]
    UnknownTemplate {
        platform: String,
        template: String,
        valid: Vec<String>,
    },

    #[error("None of the given product ids exist")]
    NoProductsMatched,

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Ad sheet not found: {0}")]
    SheetNotFound(Uuid),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<GenerateError> for CatalogError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Compose(e) => CatalogError::Compose(e),
            GenerateError::Llm(e) => CatalogError::Llm(e),
        }
    }
}

impl CatalogError {
    /// True for errors the caller can fix by changing the request
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::UnknownPlatform { .. }
                | CatalogError::UnknownTemplate { .. }
                | CatalogError::InvalidField { .. }
                | CatalogError::Upload(_)
        )
    }

    /// True when the target of the request does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::NoProductsMatched
                | CatalogError::ProductNotFound(_)
                | CatalogError::SheetNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_lists_valid_options() {
        let err = CatalogError::UnknownTemplate {
            platform: "facebook".to_string(),
            template: "nonexistent".to_string(),
            valid: vec!["basic".to_string(), "detailed".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("facebook"));
        assert!(msg.contains("nonexistent"));
        assert!(msg.contains(r#"["basic", "detailed"]"#));
    }

    #[test]
    fn test_generate_error_flattens_into_catalog_error() {
        let llm = GenerateError::Llm(LlmError::Provider {
            status: 429,
            body: "rate limited".to_string(),
        });
        assert!(matches!(CatalogError::from(llm), CatalogError::Llm(_)));

        let err = CatalogError::from(LlmError::InvalidResponse("empty".to_string()));
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
    }
}
