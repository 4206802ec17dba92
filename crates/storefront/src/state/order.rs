//! Order State

use super::LoadingState;
use storefront_client::Order;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderState {
    /// Set while a checkout request is in flight
    pub submitting: bool,
    pub last_order: Option<Order>,
    /// Order history, newest first
    pub history: Vec<Order>,
    pub history_status: LoadingState,
    /// Tracking and status-change requests in flight
    pub updates_in_flight: u32,
}

impl OrderState {
    /// Any order request in flight
    pub fn is_busy(&self) -> bool {
        self.submitting || self.history_status.is_loading() || self.updates_in_flight > 0
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.history
            .iter()
            .chain(self.last_order.as_ref())
            .find(|o| o.id == id)
    }

    /// Replace every copy of `order` held in this slice; unknown orders are
    /// added to the front of the history.
    pub fn upsert(&mut self, order: &Order) {
        match self.history.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => self.history.insert(0, order.clone()),
        }
        if let Some(last) = self.last_order.as_mut().filter(|o| o.id == order.id) {
            *last = order.clone();
        }
    }
}
