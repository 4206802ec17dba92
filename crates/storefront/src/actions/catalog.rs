//! Catalog actions
//!
//! `LoadRequested` and `MenuRequested` are picked up by the API middleware.
//! Every load carries the generation it was started with, so the reducer can
//! drop responses a newer request has superseded.

use crate::domain_models::Restaurant;
use storefront_client::MenuItemRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Fetch the restaurant list for the current filter
    LoadRequested,
    /// A fetch with this generation has been started
    LoadStarted { generation: u64 },
    /// Fetch finished
    Loaded {
        generation: u64,
        restaurants: Vec<Restaurant>,
    },
    /// Fetch failed
    LoadFailed { generation: u64, error: String },
    /// "See All": toggle pagination
    ToggleShowAll,

    /// Open a restaurant: fetch its details and its menu
    MenuRequested(String),
    MenuLoaded {
        restaurant_id: String,
        /// Fresh restaurant details; `None` when only the menu could be fetched
        restaurant: Option<Restaurant>,
        items: Vec<MenuItemRecord>,
    },
    MenuFailed { restaurant_id: String, error: String },
    CloseMenu,
}
