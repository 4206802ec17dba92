use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Store - holds application state and manages the Redux loop
///
/// Single-threaded: each action runs through the middleware chain and the
/// reducer to completion before the next one is taken from the queue.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they execute in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action, then everything middleware queued in response
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.process_pending();
    }

    /// Process actions queued by middleware or finished background tasks
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Block until no request is in flight, or until `timeout` elapses.
    ///
    /// Returns `true` when the store went idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.action_rx.recv_timeout(remaining) {
                Ok(action) => {
                    self.process(action);
                    self.process_pending();
                }
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!("Store: still busy after {:?}", timeout);
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn is_busy(&self) -> bool {
        self.state.ui.is_any_loading() || self.state.order.is_busy()
    }

    /// Run one action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, GlobalAction, UiAction};
    use crate::state::NewCartLine;

    /// Consumes `ToggleCart` and queues `SetError` instead
    struct InterceptMiddleware;

    impl Middleware for InterceptMiddleware {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::Ui(UiAction::ToggleCart)) {
                dispatcher.dispatch(Action::Ui(UiAction::SetError(Some(
                    "intercepted".to_string(),
                ))));
                return false;
            }
            true
        }
    }

    #[test]
    fn test_dispatch_reaches_reducer() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Cart(CartAction::add(NewCartLine::new(
            "r1-drink", "Iced Tea", 8_000, "r1",
        ))));
        assert_eq!(store.state().cart.subtotal(), 8_000);

        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(!store.state().running);
    }

    #[test]
    fn test_consumed_action_skips_reducer_and_queued_action_runs() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(InterceptMiddleware));

        store.dispatch(Action::Ui(UiAction::ToggleCart));
        assert!(!store.state().ui.cart_open);
        assert_eq!(store.state().ui.error.as_deref(), Some("intercepted"));
    }

    #[test]
    fn test_external_dispatch_is_processed_on_drain() {
        let mut store = Store::new(AppState::default());
        store
            .dispatcher()
            .clone()
            .dispatch(Action::Ui(UiAction::SetCartOpen(true)));
        assert!(!store.state().ui.cart_open);

        store.process_pending();
        assert!(store.state().ui.cart_open);
    }

    #[test]
    fn test_wait_idle_returns_immediately_when_idle() {
        let mut store = Store::new(AppState::default());
        assert!(store.wait_idle(Duration::from_millis(10)));
    }
}
