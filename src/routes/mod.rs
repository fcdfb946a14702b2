use actix_web::{
    error::{JsonPayloadError, PathError},
    web, Error, HttpRequest,
};

use crate::{errors::ServiceError, middleware::auth::AuthMiddleware};

pub mod bookings;
pub mod health;
pub mod profile;
pub mod properties;
pub mod search;

/// Route table shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig, jwt_secret: &str) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error));

    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            // Public routes
            .service(
                web::scope("/properties")
                    .route("", web::get().to(properties::get_all))
                    .route("/{id}", web::get().to(properties::get_by_id)),
            )
            .route("/search", web::get().to(search::search_get))
            .route("/search", web::post().to(search::search_post))
            .route("/ratings/{rating}", web::get().to(search::rating_label))
            // Protected routes
            .service(
                web::scope("/bookings")
                    .wrap(AuthMiddleware::new(jwt_secret))
                    .route("", web::post().to(bookings::create_booking))
                    .route("", web::get().to(bookings::list_bookings))
                    .route("/{id}", web::get().to(bookings::get_booking))
                    .route("/{id}/summary", web::get().to(bookings::get_booking_summary)),
            )
            .service(
                web::scope("/profile")
                    .wrap(AuthMiddleware::new(jwt_secret))
                    .route("", web::get().to(profile::get_profile)),
            ),
    );
}

/// Malformed bodies get the same `{"error": ..}` shape as service errors.
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Rejected JSON body for {}: {}", req.path(), err);
    ServiceError::ValidationFailed(err.to_string()).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> Error {
    log::debug!("Rejected path {}: {}", req.path(), err);
    ServiceError::ValidationFailed(err.to_string()).into()
}
