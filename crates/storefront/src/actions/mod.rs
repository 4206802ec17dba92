//! Actions module
//!
//! Tagged action architecture: every action is addressed to the slice whose
//! reducer consumes it. Actions that need I/O (catalog loads, login, checkout)
//! are observed by the API middleware first; their results come back as
//! plain, already-resolved actions.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod global;
pub mod order;
pub mod session;
pub mod ui;

pub use cart::CartAction;
pub use catalog::CatalogAction;
pub use filter::FilterAction;
pub use global::GlobalAction;
pub use order::OrderAction;
pub use session::SessionAction;
pub use ui::UiAction;

/// Root action enum - tagged by slice
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Cart store actions
    Cart(CartAction),
    /// Catalog filter store actions
    Filter(FilterAction),
    /// UI visibility store actions
    Ui(UiAction),
    /// Restaurant list and menu loading
    Catalog(CatalogAction),
    /// Login / logout
    Session(SessionAction),
    /// Checkout and placed orders
    Order(OrderAction),

    /// No-op action
    None,
}
