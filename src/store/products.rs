//! Product persistence

use rusqlite::{Row, params, params_from_iter};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use super::{Store, StoreError, encode_map, parse_map, parse_timestamp, parse_uuid};
use crate::domain::Product;

const PRODUCT_COLUMNS: &str = "id, nombre, precio, color, talla, caracteristicas, foto, disponible, created_at";

impl Store {
    pub fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO products (id, nombre, precio, color, talla, caracteristicas, foto, disponible, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                product.id.to_string(),
                product.nombre,
                product.precio.to_string(),
                product.color,
                product.talla,
                encode_map(&product.caracteristicas)?,
                product.foto,
                product.disponible,
                product.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_product(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM products WHERE id = ?1", PRODUCT_COLUMNS))?;
        let mut rows = stmt.query(params![id.to_string()])?;

        match rows.next()? {
            Some(row) => Ok(Some(product_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// List products, optionally filtered by availability
    pub fn list_products(&self, disponible: Option<bool>) -> Result<Vec<Product>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM products WHERE ?1 IS NULL OR disponible = ?1 ORDER BY created_at, id",
            PRODUCT_COLUMNS
        ))?;
        let mut rows = stmt.query(params![disponible])?;

        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(product_from_row(row)?);
        }
        Ok(products)
    }

    /// Load the products whose ids appear in `ids`
    ///
    /// Unmatched ids are silently dropped; callers decide whether an empty
    /// result is an error.
    pub fn products_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.lock();
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM products WHERE id IN ({}) ORDER BY created_at, id",
            PRODUCT_COLUMNS, placeholders
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(ids.iter().map(Uuid::to_string)))?;

        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(product_from_row(row)?);
        }
        Ok(products)
    }

    /// Overwrite a product row; returns false when the id is absent
    pub fn update_product(&self, product: &Product) -> Result<bool, StoreError> {
        let conn = self.lock();
        let rows = conn.execute(
            "UPDATE products
             SET nombre = ?2, precio = ?3, color = ?4, talla = ?5, caracteristicas = ?6, foto = ?7, disponible = ?8
             WHERE id = ?1",
            params![
                product.id.to_string(),
                product.nombre,
                product.precio.to_string(),
                product.color,
                product.talla,
                encode_map(&product.caracteristicas)?,
                product.foto,
                product.disponible,
            ],
        )?;
        Ok(rows > 0)
    }

    pub fn set_product_availability(&self, id: Uuid, disponible: bool) -> Result<bool, StoreError> {
        let conn = self.lock();
        let rows = conn.execute(
            "UPDATE products SET disponible = ?2 WHERE id = ?1",
            params![id.to_string(), disponible],
        )?;
        Ok(rows > 0)
    }

    /// Delete a product and its sheet associations
    pub fn delete_product(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM ad_sheet_product WHERE product_id = ?1",
            params![id.to_string()],
        )?;
        let rows = tx.execute("DELETE FROM products WHERE id = ?1", params![id.to_string()])?;
        tx.commit()?;
        Ok(rows > 0)
    }
}

pub(crate) fn product_from_row(row: &Row<'_>) -> Result<Product, StoreError> {
    let id: String = row.get(0)?;
    let precio: String = row.get(2)?;
    let caracteristicas: String = row.get(5)?;
    let created_at: String = row.get(8)?;

    Ok(Product {
        id: parse_uuid(&id)?,
        nombre: row.get(1)?,
        precio: Decimal::from_str(&precio).map_err(|e| StoreError::Corrupt(format!("bad price {}: {}", precio, e)))?,
        color: row.get(3)?,
        talla: row.get(4)?,
        caracteristicas: parse_map(&caracteristicas)?,
        foto: row.get(6)?,
        disponible: row.get(7)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
