//! Catalog State
//!
//! Last fetched restaurant list, the open restaurant menu, and the request
//! generation used to drop responses that a newer request has superseded.

use crate::domain_models::Restaurant;
use storefront_client::MenuItemRecord;

/// Loading state for remote data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Not started loading
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }
}

/// Where the displayed restaurants came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Nothing loaded yet
    #[default]
    Empty,
    /// Result of the latest request
    Live,
    /// Latest request failed; showing the previous successful result
    LastKnownGood,
    /// Latest request failed with nothing to fall back on; showing demo data
    Demo,
}

/// Menu of the restaurant the customer opened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    pub restaurant_id: String,
    /// Details fetched when the menu was opened
    pub restaurant: Option<Restaurant>,
    pub items: Vec<MenuItemRecord>,
    pub status: LoadingState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub restaurants: Vec<Restaurant>,
    pub status: LoadingState,
    pub source: CatalogSource,
    /// Generation of the most recently started request
    pub latest_generation: u64,
    /// "See All" pressed; disables pagination
    pub show_all: bool,
    pub menu: Option<MenuState>,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn is_menu_loading(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.status.is_loading())
    }

    /// Find a menu item in the open menu
    pub fn menu_item(&self, id: &str) -> Option<&MenuItemRecord> {
        self.menu
            .as_ref()
            .and_then(|m| m.items.iter().find(|i| i.id == id))
    }
}
