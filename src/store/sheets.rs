//! Ad-sheet persistence
//!
//! Sheets and their product associations are written together inside one
//! transaction. Association rows never cascade into product rows.

use rusqlite::{Connection, Row, params};
use uuid::Uuid;

use super::products::product_from_row;
use super::{Store, StoreError, encode_map, parse_map, parse_timestamp, parse_uuid};
use crate::domain::{AdSheet, Product};

const SHEET_COLUMNS: &str = "id, title, platform, template, content, meta_info, created_at";

impl Store {
    /// Persist a sheet and its product associations atomically
    pub fn insert_sheet(&self, sheet: &AdSheet) -> Result<(), StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO ad_sheets (id, title, platform, template, content, meta_info, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                sheet.id.to_string(),
                sheet.title,
                sheet.platform,
                sheet.template,
                sheet.content,
                encode_map(&sheet.meta_info)?,
                sheet.created_at.to_rfc3339(),
            ],
        )?;

        for product in &sheet.products {
            tx.execute(
                "INSERT INTO ad_sheet_product (ad_sheet_id, product_id) VALUES (?1, ?2)",
                params![sheet.id.to_string(), product.id.to_string()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    pub fn get_sheet(&self, id: Uuid) -> Result<Option<AdSheet>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM ad_sheets WHERE id = ?1", SHEET_COLUMNS))?;
        let mut rows = stmt.query(params![id.to_string()])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let mut sheet = sheet_from_row(row)?;
        sheet.products = sheet_products(&conn, sheet.id)?;
        Ok(Some(sheet))
    }

    /// List sheets, optionally filtered by platform
    pub fn list_sheets(&self, platform: Option<&str>) -> Result<Vec<AdSheet>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM ad_sheets WHERE ?1 IS NULL OR platform = ?1 ORDER BY created_at, id",
            SHEET_COLUMNS
        ))?;
        let mut rows = stmt.query(params![platform])?;

        let mut sheets = Vec::new();
        while let Some(row) = rows.next()? {
            sheets.push(sheet_from_row(row)?);
        }

        for sheet in &mut sheets {
            sheet.products = sheet_products(&conn, sheet.id)?;
        }
        Ok(sheets)
    }

    /// Overwrite a sheet row and replace its associations atomically
    ///
    /// Returns false when the id is absent; nothing is written in that
    /// case.
    pub fn update_sheet(&self, sheet: &AdSheet) -> Result<bool, StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        let rows = tx.execute(
            "UPDATE ad_sheets SET title = ?2, platform = ?3, template = ?4, content = ?5, meta_info = ?6
             WHERE id = ?1",
            params![
                sheet.id.to_string(),
                sheet.title,
                sheet.platform,
                sheet.template,
                sheet.content,
                encode_map(&sheet.meta_info)?,
            ],
        )?;
        if rows == 0 {
            return Ok(false);
        }

        tx.execute(
            "DELETE FROM ad_sheet_product WHERE ad_sheet_id = ?1",
            params![sheet.id.to_string()],
        )?;
        for product in &sheet.products {
            tx.execute(
                "INSERT INTO ad_sheet_product (ad_sheet_id, product_id) VALUES (?1, ?2)",
                params![sheet.id.to_string(), product.id.to_string()],
            )?;
        }

        tx.commit()?;
        Ok(true)
    }

    /// Delete a sheet and its association rows; products stay
    pub fn delete_sheet(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM ad_sheet_product WHERE ad_sheet_id = ?1",
            params![id.to_string()],
        )?;
        let rows = tx.execute("DELETE FROM ad_sheets WHERE id = ?1", params![id.to_string()])?;

        tx.commit()?;
        Ok(rows > 0)
    }
}

fn sheet_from_row(row: &Row<'_>) -> Result<AdSheet, StoreError> {
    let id: String = row.get(0)?;
    let meta_info: String = row.get(5)?;
    let created_at: String = row.get(6)?;

    Ok(AdSheet {
        id: parse_uuid(&id)?,
        title: row.get(1)?,
        platform: row.get(2)?,
        template: row.get(3)?,
        content: row.get(4)?,
        meta_info: parse_map(&meta_info)?,
        created_at: parse_timestamp(&created_at)?,
        products: Vec::new(),
    })
}

fn sheet_products(conn: &Connection, sheet_id: Uuid) -> Result<Vec<Product>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.nombre, p.precio, p.color, p.talla, p.caracteristicas, p.foto, p.disponible, p.created_at
         FROM products p
         JOIN ad_sheet_product sp ON sp.product_id = p.id
         WHERE sp.ad_sheet_id = ?1
         ORDER BY p.created_at, p.id",
    )?;
    let mut rows = stmt.query(params![sheet_id.to_string()])?;

    let mut products = Vec::new();
    while let Some(row) = rows.next()? {
        products.push(product_from_row(row)?);
    }
    Ok(products)
}
