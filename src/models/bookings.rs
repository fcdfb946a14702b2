use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::services::pricing_service::PriceBreakdown;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub property_name: String,
    pub room_id: String,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub user_email: String,
}

impl Booking {
    /// Half-open date ranges: a check-out day may be another booking's check-in day.
    pub fn overlaps(&self, property_id: &str, room_id: &str, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.status != BookingStatus::Cancelled
            && self.property_id == property_id
            && self.room_id == room_id
            && self.check_in < check_out
            && check_in < self.check_out
    }
}

/// Guest-facing fields collected by the booking wizard.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestDetails {
    pub bed_option: Option<String>,
    pub breakfast_included: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub property_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(flatten)]
    pub details: GuestDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub booking: Booking,
    pub price: PriceBreakdown,
}
