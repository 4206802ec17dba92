//! Application State Module
//!
//! Contains all state types used by the application, organized by slice.

mod app;
mod cart;
mod catalog;
mod filter;
mod order;
mod session;
mod ui;

pub use app::AppState;
pub use cart::{CartLine, CartState, CheckoutFees, CheckoutSummary, NewCartLine};
pub use catalog::{CatalogSource, CatalogState, LoadingState, MenuState};
pub use filter::{FilterState, FilterUpdate, PriceRange, SortDirection, SortKey};
pub use order::OrderState;
pub use session::SessionState;
pub use ui::{Resource, UiVisibilityState};
