//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from store state.

pub mod catalog_view;
pub mod category;
pub mod format;
pub mod restaurant;

pub use catalog_view::{display_list, CatalogPage};
pub use category::{find_category, Category, ALL_CATEGORIES, CATEGORIES};
pub use restaurant::{parse_distance_km, Restaurant};
