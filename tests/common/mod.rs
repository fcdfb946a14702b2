#![allow(dead_code)]

use actix_web::{web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use hotel_booking_api::{
    config::AppConfig,
    middleware::auth::Claims,
    routes,
    services::{
        booking_repository::InMemoryBookingRepository, booking_service::BookingService,
        catalog::PropertyCatalog,
    },
};

pub const TEST_SECRET: &str = "test_secret";

pub struct TestApp {
    pub catalog: Arc<PropertyCatalog>,
    pub bookings: BookingService,
    pub config: AppConfig,
}

impl TestApp {
    /// Bundled dataset and a fresh in-memory booking store.
    pub fn new() -> Self {
        let catalog = Arc::new(PropertyCatalog::bundled().expect("bundled dataset parses"));
        let bookings = BookingService::new(catalog.clone(), Arc::new(InMemoryBookingRepository::new()));
        let config = AppConfig {
            jwt_secret: TEST_SECRET.to_string(),
            ..AppConfig::default()
        };

        Self {
            catalog,
            bookings,
            config,
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let secret = self.config.jwt_secret.clone();
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.bookings.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .configure(|cfg| routes::configure(cfg, &secret))
    }
}

pub fn token_for(email: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token encodes")
}

pub fn bearer(email: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(email)))
}

pub fn get_test_email() -> String {
    "test@example.com".to_string()
}
