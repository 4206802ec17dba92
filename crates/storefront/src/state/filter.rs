//! Catalog Filter State

use crate::domain_models::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use storefront_client::CatalogQuery;
use strum::{Display, EnumIter, EnumString};

/// Field the catalog is ordered by
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[default]
    Rating,
    Price,
    Distance,
}

impl SortKey {
    /// Label shown in the sort picker
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Highest Rated",
            SortKey::Distance => "Nearest",
            SortKey::Name => "Alphabetical",
            SortKey::Price => "Price",
        }
    }
}

/// Sort direction. `Descending` is each key's natural order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    #[default]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Inclusive price bounds, smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// The whole price domain (no restriction)
    pub const FULL: PriceRange = PriceRange {
        min: 0,
        max: u64::MAX,
    };

    /// Build a range; reversed bounds are swapped
    pub fn new(min: u64, max: u64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    pub fn contains(&self, price: u64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Catalog query descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: String,
    pub search_query: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub price_range: PriceRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            price_range: PriceRange::default(),
        }
    }
}

/// Partial filter update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub category: Option<String>,
    pub search_query: Option<String>,
    pub sort_key: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
    pub price_range: Option<PriceRange>,
}

impl FilterState {
    pub fn is_all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    /// True when any field differs from its default
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Merge a partial update into this state
    pub fn merge(&mut self, update: &FilterUpdate) {
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(search_query) = &update.search_query {
            self.search_query = search_query.clone();
        }
        if let Some(sort_key) = update.sort_key {
            self.sort_key = sort_key;
        }
        if let Some(sort_direction) = update.sort_direction {
            self.sort_direction = sort_direction;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
    }

    /// Request descriptor for the restaurant listing endpoint
    pub fn to_query(&self, limit: Option<usize>) -> CatalogQuery {
        CatalogQuery {
            search: Some(self.search_query.clone()).filter(|s| !s.is_empty()),
            category: Some(self.category.clone()).filter(|_| !self.is_all_categories()),
            sort_by: Some(self.sort_key.to_string()),
            limit,
            offset: None,
        }
    }
}
