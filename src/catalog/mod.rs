//! Catalog orchestration
//!
//! The [`Catalog`] owns the store, the generator, and the photo storage,
//! and enforces the ordering rules the HTTP and CLI layers rely on:
//! requests are validated before any product is loaded or any provider
//! call is made, and generated content is persisted in one step.

mod error;
mod products;
mod sheets;

pub use error::CatalogError;

use crate::generate::Generator;
use crate::store::Store;
use crate::uploads::Uploads;

pub struct Catalog {
    store: Store,
    generator: Generator,
    uploads: Uploads,
}

impl Catalog {
    pub fn new(store: Store, generator: Generator, uploads: Uploads) -> Self {
        Self {
            store,
            generator,
            uploads,
        }
    }

    /// Check a platform/template pair against the registry
    ///
    /// Fails fast with the list of valid options, so callers see what to
    /// send instead.
    fn validate_combination(&self, platform: &str, template: &str) -> Result<(), CatalogError> {
        let registry = self.generator.registry();

        let templates = registry.templates_for(platform);
        if templates.is_empty() {
            return Err(CatalogError::UnknownPlatform {
                platform: platform.to_string(),
                valid: registry.platforms().iter().map(|p| p.to_string()).collect(),
            });
        }

        if !templates.iter().any(|t| *t == template) {
            return Err(CatalogError::UnknownTemplate {
                platform: platform.to_string(),
                template: template.to_string(),
                valid: templates.iter().map(|t| t.to_string()).collect(),
            });
        }

        Ok(())
    }
}
