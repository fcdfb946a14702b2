use actix_web::{web, HttpResponse};

use crate::{
    errors::ServiceError,
    middleware::auth_context::AuthenticatedUser,
    models::bookings::CreateBookingRequest,
    services::booking_service::BookingService,
};

/*
    POST /api/bookings
*/
pub async fn create_booking(
    bookings: web::Data<BookingService>,
    input: web::Json<CreateBookingRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let booking = bookings.create(input.into_inner(), user.email()).await?;
    Ok(HttpResponse::Created().json(booking))
}

/*
    GET /api/bookings
*/
pub async fn list_bookings(
    bookings: web::Data<BookingService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let list = bookings.list_for_user(user.email_or_empty()).await?;
    Ok(HttpResponse::Ok().json(list))
}

/*
    GET /api/bookings/{id}
*/
pub async fn get_booking(
    bookings: web::Data<BookingService>,
    path: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let booking = bookings
        .get(&path.into_inner(), user.email_or_empty())
        .await?;
    Ok(HttpResponse::Ok().json(booking))
}

/*
    GET /api/bookings/{id}/summary
*/
pub async fn get_booking_summary(
    bookings: web::Data<BookingService>,
    path: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let summary = bookings
        .summary(&path.into_inner(), user.email_or_empty())
        .await?;
    Ok(HttpResponse::Ok().json(summary))
}
