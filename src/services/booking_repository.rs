use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::models::bookings::Booking;

/// Storage for booking records.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking. Fails with `Conflict` when the same room is already
    /// held for an overlapping date range.
    async fn create(&self, booking: Booking) -> Result<Booking, ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<Booking>, ServiceError>;
    /// Exact, case-sensitive match on the owner email.
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, ServiceError>;
    /// Name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Process-lifetime store. Bookings are lost on restart.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, ServiceError> {
        // Overlap check and insert share one write guard.
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|existing| {
            existing.overlaps(
                &booking.property_id,
                &booking.room_id,
                booking.check_in,
                booking.check_out,
            )
        }) {
            return Err(ServiceError::Conflict(
                "Room is already booked for these dates".to_string(),
            ));
        }
        if bookings.iter().any(|existing| existing.id == booking.id) {
            return Err(ServiceError::Conflict("Booking already exists".to_string()));
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, ServiceError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, ServiceError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.user_email == email)
            .cloned()
            .collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
