//! Restaurant model
//!
//! Normalized catalog record. Defaults for everything the API may omit are
//! applied here, once, so the ordering pipeline never has to guess.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use storefront_client::RestaurantRecord;

/// A restaurant in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Rating 0.0..=5.0; missing or non-finite ratings become 0.0
    pub rating: f64,
    pub location: String,
    /// Distance as displayed by the API, e.g. "2.4 km"
    pub distance: String,
    /// Parsed distance in kilometres; malformed distances become 0.0
    pub distance_km: f64,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub is_open: bool,
    pub delivery_time: Option<String>,
    /// Typical spend per person; negative values are dropped
    pub average_price: Option<u64>,
}

impl Restaurant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating: 0.0,
            location: String::new(),
            distance: String::new(),
            distance_km: 0.0,
            category_id: None,
            image_url: None,
            is_open: true,
            delivery_time: None,
            average_price: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = normalize_rating(Some(rating));
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = distance.into();
        self.distance_km = parse_distance_km(&self.distance);
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_average_price(mut self, price: u64) -> Self {
        self.average_price = Some(price);
        self
    }
}

impl From<RestaurantRecord> for Restaurant {
    fn from(record: RestaurantRecord) -> Self {
        let distance_km = parse_distance_km(&record.distance);
        Self {
            id: record.id,
            name: record.name,
            rating: normalize_rating(record.rating),
            location: record.location,
            distance: record.distance,
            distance_km,
            category_id: record.category_id.filter(|c| !c.is_empty()),
            image_url: record.image_url,
            is_open: record.is_open.unwrap_or(true),
            delivery_time: record.delivery_time,
            average_price: record.average_price.and_then(|p| u64::try_from(p).ok()),
        }
    }
}

fn normalize_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => 0.0,
    }
}

fn distance_regex() -> &'static Regex {
    static DISTANCE_REGEX: OnceLock<Regex> = OnceLock::new();
    DISTANCE_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))\s*(km|m)?\b").unwrap()
    })
}

/// Parse the leading magnitude of a distance string into kilometres
///
/// "2.4 km" → 2.4, "650 m" → 0.65, "3" → 3.0, ".5 km" → 0.5. A sign is
/// kept, so "-1 km" → -1.0. Anything without a leading number yields 0.0.
pub fn parse_distance_km(distance: &str) -> f64 {
    let Some(caps) = distance_regex().captures(distance) else {
        return 0.0;
    };
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    match caps.get(2).map(|u| u.as_str().to_ascii_lowercase()) {
        Some(unit) if unit == "m" => value / 1000.0,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance_km("2.4 km"), 2.4);
        assert_eq!(parse_distance_km("12km"), 12.0);
        assert_eq!(parse_distance_km("650 m"), 0.65);
        assert_eq!(parse_distance_km(" 3 "), 3.0);
        assert_eq!(parse_distance_km("1.5 KM"), 1.5);
    }

    #[test]
    fn test_parse_distance_loose_numbers() {
        assert_eq!(parse_distance_km(".5 km"), 0.5);
        assert_eq!(parse_distance_km("-1 km"), -1.0);
        assert_eq!(parse_distance_km("+2km"), 2.0);
        assert_eq!(parse_distance_km("5. km"), 5.0);
    }

    #[test]
    fn test_parse_malformed_distance_is_zero() {
        assert_eq!(parse_distance_km(""), 0.0);
        assert_eq!(parse_distance_km("far away"), 0.0);
        assert_eq!(parse_distance_km("km 2"), 0.0);
    }

    #[test]
    fn test_from_sparse_record() {
        let record = RestaurantRecord {
            id: "r1".to_string(),
            name: "Burger King".to_string(),
            rating: Some(f64::NAN),
            location: String::new(),
            distance: "n/a".to_string(),
            image_url: None,
            category_id: Some(String::new()),
            is_open: None,
            delivery_time: None,
            average_price: Some(-10),
        };
        let restaurant = Restaurant::from(record);
        assert_eq!(restaurant.rating, 0.0);
        assert_eq!(restaurant.distance_km, 0.0);
        assert_eq!(restaurant.category_id, None);
        assert!(restaurant.is_open);
        assert_eq!(restaurant.average_price, None);
    }

    #[test]
    fn test_from_full_record() {
        let record = storefront_client::demo_restaurants().remove(0);
        let restaurant = Restaurant::from(record);
        assert_eq!(restaurant.name, "Burger King");
        assert_eq!(restaurant.rating, 4.9);
        assert_eq!(restaurant.distance_km, 2.4);
        assert_eq!(restaurant.category_id.as_deref(), Some("bestseller"));
        assert_eq!(restaurant.average_price, Some(55_000));
    }
}
