pub mod bookings;
pub mod property;
pub mod search;
pub mod search_response;
