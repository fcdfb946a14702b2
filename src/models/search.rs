use std::str::FromStr;

use serde::{de::IntoDeserializer, Deserialize, Serialize};
use url::form_urlencoded;

use crate::errors::ServiceError;
use crate::models::property::Property;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Price,
    Rating,
    Distance,
}

/// Named convenience predicates offered next to the regular filters.
///
/// Serialized as the labels in `POPULAR_FILTERS`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PopularFilter {
    BudgetHotel,
    BreakfastIncluded,
    FreeAirportShuttle,
    HostelBackpacker,
}

/// Nightly price below which a property counts as a budget hotel.
pub const BUDGET_PRICE_LIMIT: f64 = 100.0;

const POPULAR_FILTERS: [(PopularFilter, &str); 4] = [
    (PopularFilter::BudgetHotel, "Budget hotel"),
    (PopularFilter::BreakfastIncluded, "Breakfast included"),
    (PopularFilter::FreeAirportShuttle, "Free airport shuttle"),
    (PopularFilter::HostelBackpacker, "Hostel/Backpacker"),
];

impl PopularFilter {
    pub fn label(&self) -> &'static str {
        POPULAR_FILTERS
            .iter()
            .find(|(filter, _)| filter == self)
            .map(|(_, label)| *label)
            .unwrap_or_default()
    }

    fn from_label(label: &str) -> Option<Self> {
        POPULAR_FILTERS
            .iter()
            .find(|(_, known)| *known == label)
            .map(|(filter, _)| *filter)
    }

    pub fn parse(label: &str) -> Result<Self, ServiceError> {
        Self::from_label(label)
            .ok_or_else(|| ServiceError::ValidationFailed(format!("Unknown popular filter: {}", label)))
    }

    pub fn matches(&self, property: &Property) -> bool {
        match self {
            PopularFilter::BudgetHotel => property.price_per_night < BUDGET_PRICE_LIMIT,
            PopularFilter::BreakfastIncluded => property.has_amenity("Breakfast included"),
            PopularFilter::FreeAirportShuttle => property.has_amenity("Free airport shuttle"),
            PopularFilter::HostelBackpacker => property.has_tag("Hostel/Backpacker"),
        }
    }
}

impl TryFrom<String> for PopularFilter {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("Unknown popular filter: {}", label))
    }
}

impl From<PopularFilter> for &'static str {
    fn from(filter: PopularFilter) -> Self {
        filter.label()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
    pub price_range: Option<PriceRange>,
    pub rating: Option<f64>,
    pub property_class: Option<u8>,
    pub amenities: Option<Vec<String>>,
    pub popular_filters: Option<Vec<PopularFilter>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    #[serde(flatten)]
    pub filters: SearchFilters,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort_by: Option<SortBy>,
}

/// Flat query-string form of [`SearchParams`] as sent to `GET /api/search`.
///
/// `priceRange` travels as a JSON object string. List fields accept repeated
/// keys, comma-separated values, or both. Empty values count as absent.
#[derive(Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub location: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
    pub price_range: Option<String>,
    pub rating: Option<f64>,
    pub property_class: Option<u8>,
    pub amenities: Vec<String>,
    pub popular_filters: Vec<String>,
    pub sort_by: Option<SortBy>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, ServiceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ServiceError::ValidationFailed(format!("Invalid {}: {}", key, e)))
}

impl SearchQuery {
    /// Parse a raw (still percent-encoded) query string. Unknown keys are ignored.
    pub fn from_query_string(raw: &str) -> Result<Self, ServiceError> {
        let mut query = SearchQuery::default();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match &*key {
                "location" => query.location = Some(value.to_string()),
                "checkIn" => query.check_in = Some(value.to_string()),
                "checkOut" => query.check_out = Some(value.to_string()),
                "guests" => query.guests = Some(parse_number("guests", value)?),
                "rooms" => query.rooms = Some(parse_number("rooms", value)?),
                "priceRange" => query.price_range = Some(value.to_string()),
                "rating" => query.rating = Some(parse_number("rating", value)?),
                "propertyClass" => query.property_class = Some(parse_number("propertyClass", value)?),
                "amenities" => query.amenities.extend(split_list(value).map(String::from)),
                "popularFilters" => query.popular_filters.extend(split_list(value).map(String::from)),
                "sortBy" => {
                    let sort_by = SortBy::deserialize(value.into_deserializer()).map_err(
                        |e: serde::de::value::Error| {
                            ServiceError::ValidationFailed(format!("Invalid sortBy: {}", e))
                        },
                    )?;
                    query.sort_by = Some(sort_by);
                }
                "page" => query.page = Some(parse_number("page", value)?),
                "limit" => query.limit = Some(parse_number("limit", value)?),
                _ => {}
            }
        }

        Ok(query)
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl TryFrom<SearchQuery> for SearchParams {
    type Error = ServiceError;

    fn try_from(query: SearchQuery) -> Result<Self, Self::Error> {
        let price_range = match query.price_range.as_deref() {
            Some(raw) => Some(
                serde_json::from_str::<PriceRange>(raw)
                    .map_err(|e| ServiceError::ValidationFailed(format!("Invalid priceRange: {}", e)))?,
            ),
            None => None,
        };

        let amenities = Some(query.amenities).filter(|list| !list.is_empty());

        let popular_filters = if query.popular_filters.is_empty() {
            None
        } else {
            Some(
                query
                    .popular_filters
                    .iter()
                    .map(|label| PopularFilter::parse(label))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(SearchParams {
            filters: SearchFilters {
                location: query.location,
                check_in: query.check_in,
                check_out: query.check_out,
                guests: query.guests,
                rooms: query.rooms,
                price_range,
                rating: query.rating,
                property_class: query.property_class,
                amenities,
                popular_filters,
            },
            page: query.page,
            limit: query.limit,
            sort_by: query.sort_by,
        })
    }
}
