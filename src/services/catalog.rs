use std::path::Path;

use crate::errors::ServiceError;
use crate::models::property::{Property, Room};

const BUNDLED_PROPERTIES: &str = include_str!("../../data/properties.json");

/// Read-only property dataset shared by every request.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_PROPERTIES)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let properties: Vec<Property> = serde_json::from_str(raw)?;
        Ok(Self::new(properties))
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property(&self, property_id: &str) -> Result<&Property, ServiceError> {
        self.properties
            .iter()
            .find(|p| p.id == property_id)
            .ok_or_else(|| ServiceError::NotFound("Property".to_string()))
    }

    /// Property is resolved first, so an unknown property wins over an unknown room.
    pub fn room(&self, property_id: &str, room_id: &str) -> Result<(&Property, &Room), ServiceError> {
        let property = self.property(property_id)?;
        let room = property
            .room(room_id)
            .ok_or_else(|| ServiceError::NotFound("Room".to_string()))?;
        Ok((property, room))
    }
}
