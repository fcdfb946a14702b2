use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub size: String,
    pub capacity: u32,
    pub bed_type: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub breakfast_included: bool,
    pub refundable: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: f64,
    pub date: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// A bookable listing. Reference data: loaded once, never mutated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub city: String,
    pub country: String,
    pub distance_from_center: String,
    pub rating: f64,
    pub review_count: u32,
    pub price_per_night: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub star_rating: u8,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub description: String,
    pub check_in_time: String,
    pub check_out_time: String,
    #[serde(default)]
    pub house_rules: Vec<String>,
}

impl Property {
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
