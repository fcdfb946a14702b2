pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::AppConfig;
use services::{
    booking_repository::{BookingRepository, InMemoryBookingRepository},
    catalog::PropertyCatalog,
};

/// Load the property dataset named by the configuration, or the bundled one.
pub fn load_catalog(config: &AppConfig) -> std::io::Result<PropertyCatalog> {
    match &config.properties_path {
        Some(path) => {
            log::info!("Loading properties from {}", path.display());
            PropertyCatalog::load(path)
        }
        None => PropertyCatalog::bundled()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
    }
}

/// Pick the booking backend: MongoDB when a URI is configured, memory otherwise.
pub async fn create_repository(config: &AppConfig) -> std::io::Result<Arc<dyn BookingRepository>> {
    let Some(uri) = &config.mongodb_uri else {
        log::warn!("MONGODB_URI not set, bookings are kept in memory and lost on restart");
        return Ok(Arc::new(InMemoryBookingRepository::new()));
    };

    let to_io = |e: mongodb::error::Error| std::io::Error::new(std::io::ErrorKind::Other, e);
    let client = db::mongo::create_mongo_client(uri).await.map_err(to_io)?;
    let repository = db::mongo::MongoBookingRepository::new(client, &config.mongodb_database)
        .await
        .map_err(to_io)?;
    log::info!("MongoDB booking store ready");
    Ok(Arc::new(repository))
}
