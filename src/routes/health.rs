use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::services::{booking_service::BookingService, catalog::PropertyCatalog};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: String,
    booking_store: String,
    properties: usize,
    environment: String,
    version: String,
}

pub async fn health_check(
    catalog: web::Data<Arc<PropertyCatalog>>,
    bookings: web::Data<BookingService>,
) -> impl Responder {
    let health = HealthStatus {
        status: "OK".to_string(),
        booking_store: bookings.backend().to_string(),
        properties: catalog.len(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(health)
}
