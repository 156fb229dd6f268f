//! Domain types for the catalog
//!
//! Products and ad sheets as they exist on the wire and in storage. Field
//! names on products and sheets follow the upstream catalog schema
//! (`nombre`, `precio`, `talla`, `caracteristicas`, `disponible`, `foto`)
//! since clients already speak that format.

mod product;
mod sheet;

pub use product::{Product, ProductAvailability, ProductCreate, ProductUpdate};
pub use sheet::{AdSheet, AdSheetCreate, AdSheetUpdate};

/// Free-form attribute mapping attached to products and sheets.
///
/// Backed by `serde_json::Map`, which keeps keys sorted, so serialization
/// order is stable.
pub type AttrMap = serde_json::Map<String, serde_json::Value>;
