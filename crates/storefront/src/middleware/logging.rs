use crate::actions::{Action, CatalogAction, OrderAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Loaded payloads are logged by size; session tokens are never logged
        match action {
            Action::Catalog(CatalogAction::Loaded {
                generation,
                restaurants,
            }) => log::debug!(
                "Action: Catalog(Loaded {{ generation: {}, restaurants: {} }})",
                generation,
                restaurants.len()
            ),
            Action::Order(OrderAction::HistoryLoaded(orders)) => {
                log::debug!("Action: Order(HistoryLoaded({} orders))", orders.len())
            }
            Action::Session(SessionAction::LoggedIn(session)) => {
                log::debug!("Action: Session(LoggedIn({}))", session.user.email)
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
