//! Order Reducer

use crate::actions::OrderAction;
use crate::state::{LoadingState, OrderState};

/// Reduce order actions
pub fn reduce_order(mut state: OrderState, action: &OrderAction) -> OrderState {
    match action {
        OrderAction::Checkout { .. } => {
            state.submitting = true;
        }
        OrderAction::Placed(order) => {
            log::info!("Order {} placed, total {}", order.id, order.total);
            state.submitting = false;
            state.last_order = Some(order.clone());
            state.upsert(order);
        }
        OrderAction::Failed(error) => {
            log::warn!("Order failed: {}", error);
            state.submitting = false;
        }

        OrderAction::HistoryRequested => {
            state.history_status = LoadingState::Loading;
        }
        OrderAction::HistoryLoaded(_) | OrderAction::HistoryFailed(_)
            if !state.history_status.is_loading() =>
        {
            log::debug!("Order history: discarding response nobody is waiting for");
        }
        OrderAction::HistoryLoaded(orders) => {
            log::info!("Order history: {} orders", orders.len());
            state.history = orders.clone();
            state.history_status = LoadingState::Loaded;
            if let Some(fresh) = state
                .last_order
                .as_ref()
                .and_then(|last| orders.iter().find(|o| o.id == last.id))
            {
                state.last_order = Some(fresh.clone());
            }
        }
        OrderAction::HistoryFailed(error) => {
            log::warn!("Order history failed: {}", error);
            state.history_status = LoadingState::Error(error.clone());
        }

        OrderAction::TrackRequested(_) | OrderAction::StatusUpdateRequested { .. } => {
            state.updates_in_flight += 1;
        }
        OrderAction::StatusUpdated(order) => {
            log::info!("Order {} is now {:?}", order.id, order.status);
            state.updates_in_flight = state.updates_in_flight.saturating_sub(1);
            state.upsert(order);
        }
        OrderAction::UpdateFailed(error) => {
            log::warn!("Order update failed: {}", error);
            state.updates_in_flight = state.updates_in_flight.saturating_sub(1);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use storefront_client::{Order, OrderStatus};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            user_id: Some("user-sari".to_string()),
            items: Vec::new(),
            total: 32_000,
            customer_name: "Sari".to_string(),
            phone: "0812".to_string(),
            address: "Jl. Sudirman 1".to_string(),
            status,
            created_at: Utc::now(),
            delivery_time: None,
        }
    }

    fn history_ids(state: &OrderState) -> Vec<&str> {
        state.history.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_placed_order_joins_history() {
        let state = reduce_order(OrderState::default(), &OrderAction::HistoryRequested);
        let state = reduce_order(
            state,
            &OrderAction::HistoryLoaded(vec![order("ord-1", OrderStatus::Delivered)]),
        );
        let state = reduce_order(
            state,
            &OrderAction::Placed(order("ord-2", OrderStatus::Pending)),
        );
        assert_eq!(history_ids(&state), vec!["ord-2", "ord-1"]);
        assert_eq!(
            state.last_order.as_ref().map(|o| o.id.as_str()),
            Some("ord-2")
        );
    }

    #[test]
    fn test_history_load_and_failure() {
        let state = reduce_order(OrderState::default(), &OrderAction::HistoryRequested);
        assert!(state.is_busy());

        let state = reduce_order(
            state,
            &OrderAction::HistoryFailed("service unavailable".to_string()),
        );
        assert!(!state.is_busy());
        assert_eq!(
            state.history_status,
            LoadingState::Error("service unavailable".to_string())
        );
    }

    #[test]
    fn test_unrequested_history_is_discarded() {
        let state = reduce_order(
            OrderState::default(),
            &OrderAction::HistoryLoaded(vec![order("ord-1", OrderStatus::Pending)]),
        );
        assert!(state.history.is_empty());
        assert_eq!(state.history_status, LoadingState::Idle);
    }

    #[test]
    fn test_history_refreshes_last_order() {
        let state = reduce_order(
            OrderState::default(),
            &OrderAction::Placed(order("ord-1", OrderStatus::Pending)),
        );
        let state = reduce_order(state, &OrderAction::HistoryRequested);
        let state = reduce_order(
            state,
            &OrderAction::HistoryLoaded(vec![order("ord-1", OrderStatus::Preparing)]),
        );
        assert_eq!(
            state.last_order.map(|o| o.status),
            Some(OrderStatus::Preparing)
        );
    }

    #[test]
    fn test_status_update_replaces_known_order() {
        let state = reduce_order(
            OrderState::default(),
            &OrderAction::Placed(order("ord-1", OrderStatus::Pending)),
        );
        let state = reduce_order(
            state,
            &OrderAction::StatusUpdateRequested {
                id: "ord-1".to_string(),
                status: OrderStatus::Confirmed,
            },
        );
        assert_eq!(state.updates_in_flight, 1);

        let state = reduce_order(
            state,
            &OrderAction::StatusUpdated(order("ord-1", OrderStatus::Confirmed)),
        );
        assert_eq!(state.updates_in_flight, 0);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].status, OrderStatus::Confirmed);
        assert_eq!(
            state.last_order.map(|o| o.status),
            Some(OrderStatus::Confirmed)
        );
    }

    #[test]
    fn test_tracked_unknown_order_is_added() {
        let state = reduce_order(
            OrderState::default(),
            &OrderAction::TrackRequested("ord-7".to_string()),
        );
        let state = reduce_order(
            state,
            &OrderAction::StatusUpdated(order("ord-7", OrderStatus::Delivered)),
        );
        assert_eq!(history_ids(&state), vec!["ord-7"]);
        assert_eq!(state.last_order, None);
    }

    #[test]
    fn test_update_failure_never_underflows() {
        let state = reduce_order(
            OrderState::default(),
            &OrderAction::UpdateFailed("order 'ord-9' not found".to_string()),
        );
        assert_eq!(state.updates_in_flight, 0);
    }
}
