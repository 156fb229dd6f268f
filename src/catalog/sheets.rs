//! Ad-sheet operations
//!
//! Creation and regeneration follow a fixed order: validate the
//! platform/template pair, resolve products, call the provider, then
//! persist. A provider failure therefore leaves no partial record
//! behind.
//!
//! Concurrent updates to the same sheet are not coordinated: each update
//! reads, regenerates, and writes independently, and the last write wins.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{Catalog, CatalogError};
use crate::domain::{AdSheet, AdSheetCreate, AdSheetUpdate};

impl Catalog {
    /// Generate and persist a new ad sheet
    pub async fn create_sheet(&self, input: AdSheetCreate) -> Result<AdSheet, CatalogError> {
        self.validate_combination(&input.platform, &input.template)?;

        let products = self.store.products_by_ids(&input.product_ids)?;
        if products.is_empty() {
            return Err(CatalogError::NoProductsMatched);
        }

        let content = self
            .generator
            .generate(&products, &input.platform, &input.template)
            .await?;

        let sheet = AdSheet {
            id: Uuid::new_v4(),
            title: input.title,
            platform: input.platform,
            template: input.template,
            content,
            meta_info: input.meta_info,
            created_at: Utc::now(),
            products,
        };
        self.store.insert_sheet(&sheet)?;

        info!(
            id = %sheet.id,
            platform = %sheet.platform,
            template = %sheet.template,
            products = sheet.products.len(),
            "create_sheet"
        );
        Ok(sheet)
    }

    pub fn get_sheet(&self, id: Uuid) -> Result<AdSheet, CatalogError> {
        self.store
            .get_sheet(id)?
            .ok_or(CatalogError::SheetNotFound(id))
    }

    pub fn list_sheets(&self, platform: Option<&str>) -> Result<Vec<AdSheet>, CatalogError> {
        Ok(self.store.list_sheets(platform)?)
    }

    /// Apply a partial update, regenerating content when it matters
    ///
    /// Touching `platform`, `template`, or `product_ids` triggers a fresh
    /// provider call against the effective pair; title or meta-only
    /// updates keep the stored content untouched.
    pub async fn update_sheet(
        &self,
        id: Uuid,
        update: AdSheetUpdate,
    ) -> Result<AdSheet, CatalogError> {
        let current = self
            .store
            .get_sheet(id)?
            .ok_or(CatalogError::SheetNotFound(id))?;

        let regenerate = update.regenerates();

        let platform = update.platform.unwrap_or(current.platform);
        let template = update.template.unwrap_or(current.template);
        if regenerate {
            self.validate_combination(&platform, &template)?;
        }

        let products = match update.product_ids {
            Some(ids) => {
                let products = self.store.products_by_ids(&ids)?;
                if products.is_empty() {
                    return Err(CatalogError::NoProductsMatched);
                }
                products
            }
            None => current.products,
        };

        let content = if regenerate {
            self.generator
                .generate(&products, &platform, &template)
                .await?
        } else {
            current.content
        };

        let sheet = AdSheet {
            id,
            title: update.title.unwrap_or(current.title),
            platform,
            template,
            content,
            meta_info: update.meta_info.unwrap_or(current.meta_info),
            created_at: current.created_at,
            products,
        };

        if !self.store.update_sheet(&sheet)? {
            return Err(CatalogError::SheetNotFound(id));
        }

        info!(id = %id, regenerated = regenerate, "update_sheet");
        Ok(sheet)
    }

    pub fn delete_sheet(&self, id: Uuid) -> Result<(), CatalogError> {
        if !self.store.delete_sheet(id)? {
            return Err(CatalogError::SheetNotFound(id));
        }
        info!(id = %id, "delete_sheet");
        Ok(())
    }

    /// Platform/template table for the discovery endpoint and CLI
    pub fn templates(&self) -> serde_json::Value {
        self.generator.registry().as_json()
    }
}
