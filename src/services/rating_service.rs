use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingLabel {
    Excellent,
    #[serde(rename = "Very good")]
    VeryGood,
    Good,
    Average,
}

/// Display tier for a rating badge. Same buckets as [`RatingLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingTier {
    Green,
    Blue,
    Yellow,
    Gray,
}

impl RatingLabel {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 9.0 {
            RatingLabel::Excellent
        } else if rating >= 8.0 {
            RatingLabel::VeryGood
        } else if rating >= 6.0 {
            RatingLabel::Good
        } else {
            RatingLabel::Average
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLabel::Excellent => "Excellent",
            RatingLabel::VeryGood => "Very good",
            RatingLabel::Good => "Good",
            RatingLabel::Average => "Average",
        }
    }

    pub fn tier(&self) -> RatingTier {
        match self {
            RatingLabel::Excellent => RatingTier::Green,
            RatingLabel::VeryGood => RatingTier::Blue,
            RatingLabel::Good => RatingTier::Yellow,
            RatingLabel::Average => RatingTier::Gray,
        }
    }
}

impl RatingTier {
    pub fn from_rating(rating: f64) -> Self {
        RatingLabel::from_rating(rating).tier()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingTier::Green => "green",
            RatingTier::Blue => "blue",
            RatingTier::Yellow => "yellow",
            RatingTier::Gray => "gray",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds_are_closed_at_lower_bound() {
        assert_eq!(RatingLabel::from_rating(9.0), RatingLabel::Excellent);
        assert_eq!(RatingLabel::from_rating(8.999), RatingLabel::VeryGood);
        assert_eq!(RatingLabel::from_rating(8.0), RatingLabel::VeryGood);
        assert_eq!(RatingLabel::from_rating(6.0), RatingLabel::Good);
        assert_eq!(RatingLabel::from_rating(5.999), RatingLabel::Average);
        assert_eq!(RatingLabel::from_rating(0.0), RatingLabel::Average);
        assert_eq!(RatingLabel::from_rating(10.0), RatingLabel::Excellent);
    }

    #[test]
    fn test_tier_mirrors_label() {
        assert_eq!(RatingTier::from_rating(9.4), RatingTier::Green);
        assert_eq!(RatingTier::from_rating(8.1), RatingTier::Blue);
        assert_eq!(RatingTier::from_rating(6.5), RatingTier::Yellow);
        assert_eq!(RatingTier::from_rating(3.0), RatingTier::Gray);
    }

    #[test]
    fn test_label_serializes_as_display_text() {
        assert_eq!(serde_json::to_value(RatingLabel::VeryGood).unwrap(), "Very good");
        assert_eq!(RatingLabel::VeryGood.as_str(), "Very good");
    }
}
