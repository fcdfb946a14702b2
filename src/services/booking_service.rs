use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::bookings::{Booking, BookingStatus, BookingSummary, CreateBookingRequest};
use crate::services::{
    booking_repository::BookingRepository, catalog::PropertyCatalog, pricing_service::PricingService,
};

/// Guest count used when a request leaves it out.
pub const DEFAULT_GUESTS: u32 = 2;

/// Booking operations on top of a [`BookingRepository`] and the property catalog.
#[derive(Clone)]
pub struct BookingService {
    catalog: Arc<PropertyCatalog>,
    repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(catalog: Arc<PropertyCatalog>, repository: Arc<dyn BookingRepository>) -> Self {
        Self { catalog, repository }
    }

    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// Create a confirmed booking.
    ///
    /// The owner is the authenticated email when there is one, otherwise the
    /// email supplied in the request, otherwise empty.
    pub async fn create(
        &self,
        request: CreateBookingRequest,
        authenticated_email: Option<&str>,
    ) -> Result<Booking, ServiceError> {
        let (property, room) = self.catalog.room(&request.property_id, &request.room_id)?;

        if request.check_out <= request.check_in {
            return Err(ServiceError::ValidationFailed(
                "checkOut must be after checkIn".to_string(),
            ));
        }

        let price = PricingService::quote(room.price, request.check_in, request.check_out);
        let user_email = authenticated_email
            .filter(|email| !email.is_empty())
            .map(String::from)
            .or(request.details.email.clone())
            .unwrap_or_default();

        let booking = Booking {
            id: format!("booking-{}", Uuid::new_v4()),
            property_id: property.id.clone(),
            property_name: property.name.clone(),
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests.filter(|g| *g > 0).unwrap_or(DEFAULT_GUESTS),
            total_price: price.total,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            user_email,
        };

        let booking = self.repository.create(booking).await?;
        log::info!(
            "Created booking {} for room {} of property {} ({} nights, total {})",
            booking.id,
            booking.room_id,
            booking.property_id,
            price.nights,
            booking.total_price
        );
        Ok(booking)
    }

    /// Fetch a booking on behalf of `requester_email`.
    ///
    /// Owner comparison ignores case. Bookings without an owner are readable by anyone.
    pub async fn get(&self, id: &str, requester_email: &str) -> Result<Booking, ServiceError> {
        let booking = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Booking".to_string()))?;

        if !booking.user_email.is_empty()
            && booking.user_email.to_lowercase() != requester_email.to_lowercase()
        {
            log::warn!("Booking {} requested by a different owner", id);
            return Err(ServiceError::Forbidden);
        }

        Ok(booking)
    }

    pub async fn list_for_user(&self, email: &str) -> Result<Vec<Booking>, ServiceError> {
        self.repository.list_by_email(email).await
    }

    /// Booking plus the price breakdown shown on the confirmation page.
    pub async fn summary(&self, id: &str, requester_email: &str) -> Result<BookingSummary, ServiceError> {
        let booking = self.get(id, requester_email).await?;
        let (_, room) = self.catalog.room(&booking.property_id, &booking.room_id)?;
        let price = PricingService::quote(room.price, booking.check_in, booking.check_out);
        Ok(BookingSummary { booking, price })
    }
}
