use chrono::NaiveDate;
use serde::Serialize;

/// Flat city tax added once per booking.
pub const CITY_TAX: f64 = 40.0;
/// Flat service fee added once per booking.
pub const SERVICE_FEE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub price_per_night: f64,
    pub nights: i64,
    pub room_total: f64,
    pub city_tax: f64,
    pub service_fee: f64,
    pub total: f64,
}

pub struct PricingService;

impl PricingService {
    /// Whole nights between two dates. Order-insensitive.
    pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
        (check_out - check_in).num_days().abs()
    }

    pub fn total_price(price_per_night: f64, nights: i64, city_tax: f64, service_fee: f64) -> f64 {
        price_per_night * nights as f64 + city_tax + service_fee
    }

    /// Price of a stay with the fixed booking tax and fee applied.
    pub fn quote(price_per_night: f64, check_in: NaiveDate, check_out: NaiveDate) -> PriceBreakdown {
        let nights = Self::nights(check_in, check_out);
        PriceBreakdown {
            price_per_night,
            nights,
            room_total: price_per_night * nights as f64,
            city_tax: CITY_TAX,
            service_fee: SERVICE_FEE,
            total: Self::total_price(price_per_night, nights, CITY_TAX, SERVICE_FEE),
        }
    }
}
