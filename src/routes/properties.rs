use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::services::catalog::PropertyCatalog;

/*
    /api/properties
*/
pub async fn get_all(catalog: web::Data<Arc<PropertyCatalog>>) -> impl Responder {
    HttpResponse::Ok().json(catalog.all())
}

/*
    /api/properties/{id}
*/
pub async fn get_by_id(
    path: web::Path<String>,
    catalog: web::Data<Arc<PropertyCatalog>>,
) -> impl Responder {
    let id = path.into_inner();
    match catalog.property(&id) {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(err) => {
            log::debug!("Property {} requested but not in catalog", id);
            HttpResponse::NotFound().json(serde_json::json!({ "error": err.to_string() }))
        }
    }
}
