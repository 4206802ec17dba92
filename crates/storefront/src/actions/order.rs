//! Order actions
//!
//! Requests (`Checkout`, `HistoryRequested`, `TrackRequested`,
//! `StatusUpdateRequested`) are handled by the API middleware; the rest carry
//! the service's answer.

use storefront_client::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Submit the cart as an order
    Checkout {
        customer_name: String,
        phone: String,
        address: String,
    },
    /// The order service accepted the order
    Placed(Order),
    /// The order service rejected the order; the cart is kept
    Failed(String),

    /// List the orders of the signed-in customer (all orders when signed out)
    HistoryRequested,
    HistoryLoaded(Vec<Order>),
    HistoryFailed(String),

    /// Re-fetch one order to see its current status
    TrackRequested(String),
    /// Move an order to a new status
    StatusUpdateRequested { id: String, status: OrderStatus },
    /// Fresh copy of an order, from tracking or a status change
    StatusUpdated(Order),
    UpdateFailed(String),
}
