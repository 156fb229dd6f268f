//! Product endpoints
//!
//! Create and update arrive as multipart form data so a photo can ride
//! along with the fields. `caracteristicas` is sent as a JSON object
//! string; bad JSON or a bad `precio` are rejected instead of silently
//! dropped.

use actix_multipart::{Field, Multipart};
use actix_web::web::{self, Scope, scope};
use actix_web::HttpResponse;
use futures_util::StreamExt;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{AttrMap, ProductAvailability, ProductCreate, ProductUpdate};
use crate::uploads::PhotoUpload;

pub fn routes() -> Scope {
    scope("/products")
        .route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(remove))
        .route("/{id}/availability", web::patch().to(availability))
}

#[derive(Debug, Deserialize)]
pub struct ProductFilter {
    disponible: Option<bool>,
}

pub async fn list(
    catalog: web::Data<Catalog>,
    query: web::Query<ProductFilter>,
) -> Result<HttpResponse, CatalogError> {
    let products = catalog.list_products(query.disponible)?;
    Ok(HttpResponse::Ok().json(products))
}

pub async fn get(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CatalogError> {
    let product = catalog.get_product(id.into_inner())?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn create(
    catalog: web::Data<Catalog>,
    payload: Multipart,
) -> Result<HttpResponse, CatalogError> {
    let form = read_form(payload).await?;
    let (input, photo) = form.into_create()?;
    let product = catalog.create_product(input, photo)?;
    Ok(HttpResponse::Created().json(product))
}

pub async fn update(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
    payload: Multipart,
) -> Result<HttpResponse, CatalogError> {
    let form = read_form(payload).await?;
    let (update, photo) = form.into_update()?;
    let product = catalog.update_product(id.into_inner(), update, photo)?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn availability(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
    body: web::Json<ProductAvailability>,
) -> Result<HttpResponse, CatalogError> {
    let product = catalog.set_product_availability(id.into_inner(), body.disponible)?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn remove(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CatalogError> {
    catalog.delete_product(id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
}

/// Raw multipart fields before type checking
#[derive(Debug, Default)]
struct ProductForm {
    nombre: Option<String>,
    precio: Option<String>,
    color: Option<String>,
    talla: Option<String>,
    caracteristicas: Option<String>,
    disponible: Option<String>,
    photo: Option<PhotoUpload>,
}

impl ProductForm {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "nombre" => self.nombre = Some(value),
            "precio" => self.precio = Some(value),
            "color" => self.color = Some(value),
            "talla" => self.talla = Some(value),
            "caracteristicas" => self.caracteristicas = Some(value),
            "disponible" => self.disponible = Some(value),
            _ => {}
        }
    }

    fn into_create(self) -> Result<(ProductCreate, Option<PhotoUpload>), CatalogError> {
        let nombre = self.nombre.ok_or_else(|| missing("nombre"))?;
        let precio = parse_precio(&self.precio.ok_or_else(|| missing("precio"))?)?;

        let caracteristicas = match self.caracteristicas.as_deref() {
            Some(raw) => parse_caracteristicas(raw)?,
            None => AttrMap::new(),
        };
        let disponible = match self.disponible.as_deref() {
            Some(raw) => parse_disponible(raw)?,
            None => true,
        };

        let input = ProductCreate {
            nombre,
            precio,
            color: self.color,
            talla: self.talla,
            caracteristicas,
            disponible,
        };
        Ok((input, self.photo))
    }

    fn into_update(self) -> Result<(ProductUpdate, Option<PhotoUpload>), CatalogError> {
        let update = ProductUpdate {
            nombre: self.nombre,
            precio: self.precio.as_deref().map(parse_precio).transpose()?,
            color: self.color,
            talla: self.talla,
            caracteristicas: self
                .caracteristicas
                .as_deref()
                .map(parse_caracteristicas)
                .transpose()?,
            disponible: self.disponible.as_deref().map(parse_disponible).transpose()?,
        };
        Ok((update, self.photo))
    }
}

fn missing(field: &str) -> CatalogError {
    CatalogError::InvalidField {
        field: field.to_string(),
        reason: "required".to_string(),
    }
}

fn parse_precio(raw: &str) -> Result<Decimal, CatalogError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| CatalogError::InvalidField {
            field: "precio".to_string(),
            reason: format!("'{raw}' is not a decimal number"),
        })
}

fn parse_caracteristicas(raw: &str) -> Result<AttrMap, CatalogError> {
    serde_json::from_str::<AttrMap>(raw).map_err(|e| CatalogError::InvalidField {
        field: "caracteristicas".to_string(),
        reason: format!("not a JSON object: {e}"),
    })
}

fn parse_disponible(raw: &str) -> Result<bool, CatalogError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(CatalogError::InvalidField {
            field: "disponible".to_string(),
            reason: format!("'{raw}' is not a boolean"),
        }),
    }
}

fn form_error(e: actix_multipart::MultipartError) -> CatalogError {
    CatalogError::InvalidField {
        field: "form".to_string(),
        reason: e.to_string(),
    }
}

async fn read_form(mut payload: Multipart) -> Result<ProductForm, CatalogError> {
    let mut form = ProductForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(form_error)?;
        let Some(name) = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(String::from))
        else {
            continue;
        };

        if name == "foto" {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename().map(String::from))
                .unwrap_or_default();
            let bytes = read_field_bytes(&mut field).await?;
            // An empty file part means no photo was attached
            if !bytes.is_empty() {
                form.photo = Some(PhotoUpload { filename, bytes });
            }
        } else {
            let bytes = read_field_bytes(&mut field).await?;
            let value = String::from_utf8(bytes).map_err(|_| CatalogError::InvalidField {
                field: name.clone(),
                reason: "not valid UTF-8".to_string(),
            })?;
            form.set(&name, value);
        }
    }

    Ok(form)
}

async fn read_field_bytes(field: &mut Field) -> Result<Vec<u8>, CatalogError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk.map_err(form_error)?);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_create_requires_nombre_and_precio() {
        let err = ProductForm::default().into_create().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { field, .. } if field == "nombre"));

        let form = ProductForm {
            nombre: Some("Camisa".to_string()),
            ..Default::default()
        };
        let err = form.into_create().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { field, .. } if field == "precio"));
    }

    #[test]
    fn test_into_create_applies_defaults() {
        let form = ProductForm {
            nombre: Some("Camisa".to_string()),
            precio: Some("19.99".to_string()),
            ..Default::default()
        };
        let (input, photo) = form.into_create().unwrap();

        assert!(input.disponible);
        assert!(input.caracteristicas.is_empty());
        assert!(photo.is_none());
        assert_eq!(input.precio.to_string(), "19.99");
    }

    #[test]
    fn test_invalid_caracteristicas_is_rejected() {
        let form = ProductForm {
            nombre: Some("Camisa".to_string()),
            precio: Some("19.99".to_string()),
            caracteristicas: Some("not json".to_string()),
            ..Default::default()
        };
        let err = form.into_create().unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidField { field, .. } if field == "caracteristicas")
        );
    }

    #[test]
    fn test_parse_disponible_accepts_form_booleans() {
        assert!(parse_disponible("true").unwrap());
        assert!(parse_disponible("1").unwrap());
        assert!(!parse_disponible("False").unwrap());
        assert!(!parse_disponible("0").unwrap());
        assert!(parse_disponible("maybe").is_err());
    }

    #[test]
    fn test_into_update_keeps_unset_fields_none() {
        let form = ProductForm {
            precio: Some("24.50".to_string()),
            ..Default::default()
        };
        let (update, _) = form.into_update().unwrap();

        assert!(update.nombre.is_none());
        assert_eq!(update.precio.map(|p| p.to_string()), Some("24.50".to_string()));
        assert!(update.disponible.is_none());
    }
}
