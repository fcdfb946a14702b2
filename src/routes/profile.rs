use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::{
    errors::ServiceError, middleware::auth_context::AuthenticatedUser, models::bookings::Booking,
    services::booking_service::BookingService,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: Option<String>,
    pub bookings: Vec<Booking>,
}

/*
    GET /api/profile
*/
pub async fn get_profile(
    bookings: web::Data<BookingService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let owned = match user.email() {
        Some(email) => bookings.list_for_user(email).await?,
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(UserProfile {
        email: user.email,
        bookings: owned,
    }))
}
