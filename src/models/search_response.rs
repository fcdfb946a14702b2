use crate::models::property::Property;
use crate::services::pagination::PageMarker;
use serde::{Deserialize, Serialize};

/// Response format for `/api/search`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub properties: Vec<Property>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<PageMarker>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub rating: f64,
    pub label: String,
    pub tier: String,
}
