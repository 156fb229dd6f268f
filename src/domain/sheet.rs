//! Ad-sheet record and its input shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttrMap, Product};

/// A generated marketing text artifact
///
/// Tied to one platform, one template, and a set of products. `content`
/// holds the generated markdown and only changes through explicit
/// regeneration. The product association is many-to-many; deleting a sheet
/// never deletes products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSheet {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub template: String,
    pub content: String,
    #[serde(default)]
    pub meta_info: AttrMap,
    pub created_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

/// Fields accepted when creating an ad sheet
///
/// `product_ids` must be non-empty; content is generated, never supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSheetCreate {
    pub title: String,
    pub platform: String,
    pub template: String,
    #[serde(default)]
    pub meta_info: AttrMap,
    pub product_ids: Vec<Uuid>,
}

/// Partial update for an ad sheet; `None` fields keep their stored values
///
/// Supplying `platform`, `template`, or `product_ids` triggers content
/// regeneration; title/meta-only updates never do.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdSheetUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub meta_info: Option<AttrMap>,
    #[serde(default)]
    pub product_ids: Option<Vec<Uuid>>,
}

impl AdSheetUpdate {
    /// True when this update forces the content to be regenerated
    pub fn regenerates(&self) -> bool {
        self.platform.is_some() || self.template.is_some() || self.product_ids.is_some()
    }
}
