//! Storefront core
//!
//! Redux-style state container for a restaurant storefront: cart, catalog
//! filters, UI visibility, catalog loading, session and checkout. Actions go
//! through a middleware chain (logging, API side effects) into pure reducers.
//!
//! ```rust
//! use storefront::actions::{Action, CartAction};
//! use storefront::state::{AppState, NewCartLine};
//! use storefront::store::Store;
//!
//! let mut store = Store::new(AppState::default());
//! store.dispatch(Action::Cart(CartAction::add(NewCartLine::new(
//!     "r1-special",
//!     "Chef's Special",
//!     25_000,
//!     "r1",
//! ))));
//! assert_eq!(store.state().cart.subtotal(), 25_000);
//! ```

pub mod actions;
pub mod commands;
pub mod dispatcher;
pub mod domain_models;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod views;
