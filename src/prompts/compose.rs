//! Prompt composition
//!
//! Turns a product list, a platform name, and a skeleton into the
//! instruction payload sent to the provider. Rendering is deterministic:
//! identical inputs produce byte-identical prompts.

use handlebars::Handlebars;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::embedded;
use crate::domain::{AttrMap, Product};

/// Errors from prompt composition
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Failed to serialize products: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render prompt template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Wire shape of one product inside the prompt
///
/// Field order is the order the keys appear in the embedded JSON. `precio`
/// serializes as a plain number.
#[derive(Debug, Serialize)]
struct PromptProduct<'a> {
    id: String,
    nombre: &'a str,
    precio: Decimal,
    color: Option<&'a str>,
    talla: Option<&'a str>,
    caracteristicas: &'a AttrMap,
    disponible: bool,
    foto: Option<&'a str>,
}

impl<'a> From<&'a Product> for PromptProduct<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id.to_string(),
            nombre: &product.nombre,
            precio: product.precio,
            color: product.color.as_deref(),
            talla: product.talla.as_deref(),
            caracteristicas: &product.caracteristicas,
            disponible: product.disponible,
            foto: product.foto.as_deref(),
        }
    }
}

/// Context for rendering the instruction template
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    products_json: String,
    platform: &'a str,
    skeleton: &'a str,
}

/// Renders the ad-sheet instruction prompt
///
/// HTML escaping is disabled: the product JSON and the skeleton must land
/// in the prompt verbatim.
pub struct PromptComposer {
    hbs: Handlebars<'static>,
}

impl PromptComposer {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Build the instruction prompt for the given products and skeleton
    pub fn compose(&self, products: &[Product], platform: &str, skeleton: &str) -> Result<String, ComposeError> {
        let records: Vec<PromptProduct> = products.iter().map(PromptProduct::from).collect();
        let products_json = serde_json::to_string_pretty(&records)?;

        let context = PromptContext {
            products_json,
            platform,
            skeleton,
        };

        Ok(self.hbs.render_template(embedded::AD_SHEET_PROMPT, &context)?)
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new()
    }
}
