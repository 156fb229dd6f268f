//! HTTP surface
//!
//! Routes live under `/api`; the uploads directory is served separately
//! as static files. Handlers return `Result<HttpResponse, CatalogError>`
//! and the [`ResponseError`] impl below maps the error taxonomy onto
//! status codes with a uniform `{"detail": ...}` body.

pub mod products;
pub mod sheets;

use actix_web::http::StatusCode;
use actix_web::web::{self, Scope, scope};
use actix_web::{HttpResponse, Responder, ResponseError};
use serde_json::json;
use tracing::error;

use crate::catalog::CatalogError;

/// All `/api` routes as one mountable scope
pub fn configure_routes() -> Scope {
    scope("/api")
        .service(products::routes())
        .service(sheets::routes())
        .route("/ad-templates", web::get().to(sheets::templates))
}

/// Liveness probe, mounted at the root
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}

/// JSON extractor config that keeps body errors in the `detail` envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "detail": detail })),
        )
        .into()
    })
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            match self {
                CatalogError::Llm(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self}");
        }

        // Upstream and internal diagnostics stay in the logs, not in
        // response bodies
        let detail = match self {
            CatalogError::Llm(_) => "Ad sheet generation failed".to_string(),
            CatalogError::Store(_) | CatalogError::Compose(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(json!({ "detail": detail }))
    }
}
