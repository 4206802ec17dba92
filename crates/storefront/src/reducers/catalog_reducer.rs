//! Catalog Reducer
//!
//! Applies restaurant and menu load results. Only the response to the most
//! recently started request is accepted; anything older is dropped.

use crate::actions::CatalogAction;
use crate::domain_models::Restaurant;
use crate::state::{CatalogSource, CatalogState, LoadingState, MenuState};
use storefront_client::demo_restaurants;

/// Reduce catalog actions
pub fn reduce_catalog(mut state: CatalogState, action: &CatalogAction) -> CatalogState {
    match action {
        // Picked up by the API middleware
        CatalogAction::LoadRequested => {}

        CatalogAction::LoadStarted { generation } => {
            if *generation < state.latest_generation {
                log::debug!(
                    "Catalog: ignoring start of generation {} (latest {})",
                    generation,
                    state.latest_generation
                );
            } else {
                state.latest_generation = *generation;
                state.status = LoadingState::Loading;
            }
        }

        CatalogAction::Loaded {
            generation,
            restaurants,
        } => {
            if *generation != state.latest_generation {
                log::debug!(
                    "Catalog: discarding stale response (generation {}, latest {})",
                    generation,
                    state.latest_generation
                );
            } else {
                log::info!("Catalog: loaded {} restaurants", restaurants.len());
                state.restaurants = restaurants.clone();
                state.status = LoadingState::Loaded;
                state.source = CatalogSource::Live;
            }
        }

        CatalogAction::LoadFailed { generation, error } => {
            if *generation != state.latest_generation {
                log::debug!(
                    "Catalog: discarding stale failure (generation {}, latest {})",
                    generation,
                    state.latest_generation
                );
            } else {
                log::warn!("Catalog: load failed: {}", error);
                state.status = LoadingState::Error(error.clone());
                if state.restaurants.is_empty() {
                    log::info!("Catalog: no previous result, falling back to demo data");
                    state.restaurants = demo_restaurants().into_iter().map(Restaurant::from).collect();
                    state.source = CatalogSource::Demo;
                } else if state.source != CatalogSource::Demo {
                    state.source = CatalogSource::LastKnownGood;
                }
            }
        }

        CatalogAction::ToggleShowAll => {
            state.show_all = !state.show_all;
        }

        CatalogAction::MenuRequested(restaurant_id) => {
            state.menu = Some(MenuState {
                restaurant_id: restaurant_id.clone(),
                restaurant: None,
                items: Vec::new(),
                status: LoadingState::Loading,
            });
        }

        CatalogAction::MenuLoaded {
            restaurant_id,
            restaurant,
            items,
        } => match state.menu.as_mut() {
            Some(menu) if menu.restaurant_id == *restaurant_id => {
                menu.restaurant = restaurant.clone();
                menu.items = items.clone();
                menu.status = LoadingState::Loaded;
            }
            _ => log::debug!("Catalog: discarding menu for {}", restaurant_id),
        },

        CatalogAction::MenuFailed {
            restaurant_id,
            error,
        } => match state.menu.as_mut() {
            Some(menu) if menu.restaurant_id == *restaurant_id => {
                log::warn!("Catalog: menu for {} failed: {}", restaurant_id, error);
                menu.status = LoadingState::Error(error.clone());
            }
            _ => log::debug!("Catalog: discarding menu failure for {}", restaurant_id),
        },

        CatalogAction::CloseMenu => {
            state.menu = None;
        }
    }
    state
}
