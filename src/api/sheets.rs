//! Ad-sheet endpoints

use actix_web::web::{self, Scope, scope};
use actix_web::HttpResponse;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{AdSheetCreate, AdSheetUpdate};

pub fn routes() -> Scope {
    scope("/ad-sheets")
        .route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(remove))
}

#[derive(Debug, Deserialize)]
pub struct SheetFilter {
    platform: Option<String>,
}

pub async fn list(
    catalog: web::Data<Catalog>,
    query: web::Query<SheetFilter>,
) -> Result<HttpResponse, CatalogError> {
    let sheets = catalog.list_sheets(query.platform.as_deref())?;
    Ok(HttpResponse::Ok().json(sheets))
}

pub async fn get(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CatalogError> {
    let sheet = catalog.get_sheet(id.into_inner())?;
    Ok(HttpResponse::Ok().json(sheet))
}

pub async fn create(
    catalog: web::Data<Catalog>,
    input: web::Json<AdSheetCreate>,
) -> Result<HttpResponse, CatalogError> {
    let sheet = catalog.create_sheet(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(sheet))
}

pub async fn update(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
    input: web::Json<AdSheetUpdate>,
) -> Result<HttpResponse, CatalogError> {
    let sheet = catalog.update_sheet(id.into_inner(), input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(sheet))
}

pub async fn remove(
    catalog: web::Data<Catalog>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, CatalogError> {
    catalog.delete_sheet(id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Ad sheet deleted" })))
}

/// Platform/template discovery table
pub async fn templates(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.templates())
}
