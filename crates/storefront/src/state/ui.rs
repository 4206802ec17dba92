//! UI Visibility State
//!
//! Transient view flags. Never persisted, never validated against other state.

use std::collections::BTreeMap;
use strum::Display;

/// Resources with a loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Restaurants,
    Menu,
    Orders,
    Auth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiVisibilityState {
    pub cart_open: bool,
    pub menu_open: bool,
    pub checkout_open: bool,
    pub active_modal: Option<String>,
    pub loading: BTreeMap<Resource, bool>,
    pub error: Option<String>,
}

impl UiVisibilityState {
    pub fn is_loading(&self, resource: Resource) -> bool {
        self.loading.get(&resource).copied().unwrap_or(false)
    }

    pub fn is_any_loading(&self) -> bool {
        self.loading.values().any(|l| *l)
    }

    pub fn set_loading(&mut self, resource: Resource, loading: bool) {
        self.loading.insert(resource, loading);
    }
}
