//! Product record and its input shapes

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AttrMap;

/// A sellable item in the catalog
///
/// `precio` is a fixed-point decimal (two fractional digits) that
/// serializes as a JSON number. `foto` holds the stored filename of the
/// product photo, served under `/uploads/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub nombre: String,
    pub precio: Decimal,
    pub color: Option<String>,
    pub talla: Option<String>,
    #[serde(default)]
    pub caracteristicas: AttrMap,
    pub foto: Option<String>,
    pub disponible: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a fresh product from creation input plus an optional stored
    /// photo filename
    pub fn new(input: ProductCreate, foto: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nombre: input.nombre,
            precio: input.precio,
            color: input.color,
            talla: input.talla,
            caracteristicas: input.caracteristicas,
            foto,
            disponible: input.disponible,
            created_at: Utc::now(),
        }
    }
}

/// Fields accepted when creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub nombre: String,
    pub precio: Decimal,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub talla: Option<String>,
    #[serde(default)]
    pub caracteristicas: AttrMap,
    #[serde(default = "default_disponible")]
    pub disponible: bool,
}

fn default_disponible() -> bool {
    true
}

/// Partial update for a product; `None` fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub precio: Option<Decimal>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub talla: Option<String>,
    #[serde(default)]
    pub caracteristicas: Option<AttrMap>,
    #[serde(default)]
    pub disponible: Option<bool>,
}

/// Body of the availability toggle endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductAvailability {
    pub disponible: bool,
}
