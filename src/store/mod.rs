//! SQLite persistence
//!
//! One bundled SQLite database holds products, ad sheets, and their join
//! table. All access goes through [`Store`], which serializes access over
//! a single connection. Create/update paths wrap their writes in one
//! transaction; the provider call always finishes before a transaction
//! starts.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use uuid::Uuid;

mod products;
mod sheets;

use crate::domain::AttrMap;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS products (
    id              TEXT PRIMARY KEY,
    nombre          TEXT NOT NULL,
    precio          TEXT NOT NULL,
    color           TEXT,
    talla           TEXT,
    caracteristicas TEXT NOT NULL DEFAULT '{}',
    foto            TEXT,
    disponible      INTEGER NOT NULL DEFAULT 1,
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ad_sheets (
    id         TEXT PRIMARY KEY,
    title      TEXT NOT NULL,
    platform   TEXT NOT NULL,
    template   TEXT NOT NULL,
    content    TEXT NOT NULL,
    meta_info  TEXT NOT NULL DEFAULT '{}',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ad_sheet_product (
    ad_sheet_id TEXT NOT NULL REFERENCES ad_sheets(id),
    product_id  TEXT NOT NULL REFERENCES products(id),
    PRIMARY KEY (ad_sheet_id, product_id)
);
";

/// Handle to the catalog database
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (or create) the database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Lock the connection, recovering from a poisoned mutex
    pub(crate) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(s).map_err(|e| StoreError::Corrupt(format!("bad uuid {}: {}", s, e)))
}

pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("bad timestamp {}: {}", s, e)))
}

pub(crate) fn parse_map(s: &str) -> Result<AttrMap, StoreError> {
    serde_json::from_str(s).map_err(|e| StoreError::Corrupt(format!("bad attribute map: {}", e)))
}

pub(crate) fn encode_map(map: &AttrMap) -> Result<String, StoreError> {
    serde_json::to_string(map).map_err(|e| StoreError::Corrupt(format!("unencodable attribute map: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_boots_schema() {
        let store = Store::open_in_memory().unwrap();

        let conn = store.lock();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('products', 'ad_sheets', 'ad_sheet_product')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.db3");

        let store = Store::open(&path);
        assert!(store.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_parse_timestamp_round_trip() {
        let now = Utc::now();
        let parsed = parse_timestamp(&now.to_rfc3339()).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_map_rejects_garbage() {
        assert!(parse_map("not json").is_err());
        assert!(parse_map("{}").unwrap().is_empty());
    }
}
