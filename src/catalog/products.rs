//! Product operations
//!
//! CRUD over the product table plus the photo side effects: a new photo
//! is stored before the row is written, and replaced or orphaned files
//! are removed after the row change sticks.

use tracing::info;
use uuid::Uuid;

use super::{Catalog, CatalogError};
use crate::domain::{Product, ProductCreate, ProductUpdate};
use crate::uploads::PhotoUpload;

impl Catalog {
    pub fn create_product(
        &self,
        input: ProductCreate,
        photo: Option<PhotoUpload>,
    ) -> Result<Product, CatalogError> {
        let foto = match photo {
            Some(upload) => Some(self.uploads.save(&upload)?),
            None => None,
        };

        let product = Product::new(input, foto);
        self.store.insert_product(&product)?;

        info!(id = %product.id, nombre = %product.nombre, "create_product");
        Ok(product)
    }

    pub fn get_product(&self, id: Uuid) -> Result<Product, CatalogError> {
        self.store
            .get_product(id)?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    pub fn list_products(&self, disponible: Option<bool>) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.list_products(disponible)?)
    }

    /// Apply the supplied fields; anything left out keeps its stored value
    pub fn update_product(
        &self,
        id: Uuid,
        update: ProductUpdate,
        photo: Option<PhotoUpload>,
    ) -> Result<Product, CatalogError> {
        let mut product = self
            .store
            .get_product(id)?
            .ok_or(CatalogError::ProductNotFound(id))?;

        if let Some(nombre) = update.nombre {
            product.nombre = nombre;
        }
        if let Some(precio) = update.precio {
            product.precio = precio;
        }
        if let Some(color) = update.color {
            product.color = Some(color);
        }
        if let Some(talla) = update.talla {
            product.talla = Some(talla);
        }
        if let Some(caracteristicas) = update.caracteristicas {
            product.caracteristicas = caracteristicas;
        }
        if let Some(disponible) = update.disponible {
            product.disponible = disponible;
        }

        let mut replaced_photo = None;
        if let Some(upload) = &photo {
            let stored = self.uploads.save(upload)?;
            replaced_photo = product.foto.replace(stored);
        }

        if !self.store.update_product(&product)? {
            // Row vanished under us; don't leave the fresh file orphaned
            if photo.is_some() {
                if let Some(stored) = &product.foto {
                    self.uploads.remove(stored);
                }
            }
            return Err(CatalogError::ProductNotFound(id));
        }

        if let Some(old) = replaced_photo {
            self.uploads.remove(&old);
        }

        Ok(product)
    }

    pub fn set_product_availability(
        &self,
        id: Uuid,
        disponible: bool,
    ) -> Result<Product, CatalogError> {
        if !self.store.set_product_availability(id, disponible)? {
            return Err(CatalogError::ProductNotFound(id));
        }
        self.store
            .get_product(id)?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Delete a product, its sheet associations, and its photo file
    ///
    /// Sheets referencing the product keep their generated content; only
    /// the association rows go away.
    pub fn delete_product(&self, id: Uuid) -> Result<(), CatalogError> {
        let product = self
            .store
            .get_product(id)?
            .ok_or(CatalogError::ProductNotFound(id))?;

        if !self.store.delete_product(id)? {
            return Err(CatalogError::ProductNotFound(id));
        }

        if let Some(foto) = &product.foto {
            self.uploads.remove(foto);
        }

        info!(id = %id, "delete_product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testing::{catalog_with, product_input, seed_product};
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&[0, 0, 0, 13]);
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]);
        bytes.extend_from_slice(&[0x1F, 0x15, 0xC4, 0x89]);
        bytes
    }

    fn photo(name: &str) -> PhotoUpload {
        PhotoUpload {
            filename: name.to_string(),
            bytes: png_bytes(),
        }
    }

    #[test]
    fn test_create_product_stores_photo() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(Arc::new(MockLlmClient::new(vec![])), dir.path());

        let product = catalog
            .create_product(product_input("Camisa", "19.99"), Some(photo("camisa.png")))
            .unwrap();

        let stored = product.foto.as_deref().unwrap();
        assert!(dir.path().join(stored).exists());
        assert_eq!(catalog.get_product(product.id).unwrap().foto, product.foto);
    }

    #[test]
    fn test_update_product_replaces_photo_and_removes_old() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(Arc::new(MockLlmClient::new(vec![])), dir.path());

        let product = catalog
            .create_product(product_input("Camisa", "19.99"), Some(photo("one.png")))
            .unwrap();
        let old = product.foto.clone().unwrap();

        let updated = catalog
            .update_product(product.id, ProductUpdate::default(), Some(photo("two.png")))
            .unwrap();
        let new = updated.foto.unwrap();

        assert_ne!(old, new);
        assert!(!dir.path().join(&old).exists());
        assert!(dir.path().join(&new).exists());
    }

    #[test]
    fn test_update_product_keeps_unsupplied_fields() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(Arc::new(MockLlmClient::new(vec![])), dir.path());

        let mut input = product_input("Camisa", "19.99");
        input.color = Some("azul".to_string());
        let product = catalog.create_product(input, None).unwrap();

        let updated = catalog
            .update_product(
                product.id,
                ProductUpdate {
                    precio: Some("24.50".parse().unwrap()),
                    ..Default::default()
                },
                None,
            )
            .unwrap();

        assert_eq!(updated.nombre, "Camisa");
        assert_eq!(updated.precio.to_string(), "24.50");
        assert_eq!(updated.color.as_deref(), Some("azul"));
    }

    #[test]
    fn test_set_availability_returns_updated_product() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(Arc::new(MockLlmClient::new(vec![])), dir.path());

        let product = seed_product(&catalog, "Camisa", "19.99");
        let updated = catalog
            .set_product_availability(product.id, false)
            .unwrap();

        assert!(!updated.disponible);
        assert_eq!(catalog.list_products(Some(true)).unwrap().len(), 0);
    }

    #[test]
    fn test_delete_product_removes_photo_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(Arc::new(MockLlmClient::new(vec![])), dir.path());

        let product = catalog
            .create_product(product_input("Camisa", "19.99"), Some(photo("camisa.png")))
            .unwrap();
        let stored = product.foto.clone().unwrap();

        catalog.delete_product(product.id).unwrap();

        assert!(!dir.path().join(&stored).exists());
        assert!(matches!(
            catalog.get_product(product.id),
            Err(CatalogError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_missing_product_paths_return_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_with(Arc::new(MockLlmClient::new(vec![])), dir.path());
        let id = Uuid::new_v4();

        assert!(matches!(
            catalog.get_product(id),
            Err(CatalogError::ProductNotFound(_))
        ));
        assert!(matches!(
            catalog.update_product(id, ProductUpdate::default(), None),
            Err(CatalogError::ProductNotFound(_))
        ));
        assert!(matches!(
            catalog.set_product_availability(id, true),
            Err(CatalogError::ProductNotFound(_))
        ));
        assert!(matches!(
            catalog.delete_product(id),
            Err(CatalogError::ProductNotFound(_))
        ));
    }
}
