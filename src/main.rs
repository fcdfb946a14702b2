use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use hotel_booking_api::{
    config::AppConfig, create_repository, load_catalog, routes,
    services::booking_service::BookingService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();

    let catalog = Arc::new(load_catalog(&config).map_err(|e| {
        log::error!("Failed to load property dataset: {}", e);
        e
    })?);
    log::info!("Loaded {} properties", catalog.len());

    let repository = create_repository(&config).await.map_err(|e| {
        log::error!("Failed to initialise booking store: {}", e);
        e
    })?;
    let bookings = BookingService::new(catalog.clone(), repository);

    let host = config.host.clone();
    let port = config.port;
    log::info!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        let jwt_secret = config.jwt_secret.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(bookings.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(|cfg| routes::configure(cfg, &jwt_secret))
    })
    .bind((host, port))?
    .run()
    .await
}
