//! Storefront API Middleware
//!
//! Central middleware for all remote calls:
//! - Restaurant list loading (on LoadRequested and on every filter change)
//! - Restaurant details and menu loading
//! - Login and sign-up
//! - Checkout, order history, tracking and status changes
//!
//! Calls run on the middleware's own tokio runtime. Results come back as plain
//! actions through the `Dispatcher`, so reducers never see a future.

use crate::actions::{Action, CatalogAction, OrderAction, SessionAction, UiAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Restaurant;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::Arc;
use storefront_client::{
    LoginCredentials, OrderDraft, OrderStatus, RegisterData, StorefrontClient,
};
use tokio::runtime::{Builder, Runtime};

/// Middleware for all storefront API operations
pub struct ApiMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn StorefrontClient>,
    /// Generation of the last catalog request started
    generation: u64,
}

impl ApiMiddleware {
    pub fn new(client: Arc<dyn StorefrontClient>) -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("storefront-api")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            client,
            generation: 0,
        })
    }

    /// Start a restaurant fetch for the current filter under a new generation
    fn load_restaurants(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        self.generation = self.generation.max(state.catalog.latest_generation) + 1;
        let generation = self.generation;
        let query = state.filters.to_query(None);

        log::debug!(
            "ApiMiddleware: loading restaurants (generation {}) {:?}",
            generation,
            query.to_params()
        );
        // Queued before the fetch is spawned, so it always reduces first
        dispatcher.dispatch(Action::Catalog(CatalogAction::LoadStarted { generation }));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let action = match client.fetch_restaurants(&query).await {
                Ok(records) => CatalogAction::Loaded {
                    generation,
                    restaurants: records.into_iter().map(Restaurant::from).collect(),
                },
                Err(e) => {
                    log::error!("ApiMiddleware: failed to load restaurants: {}", e);
                    CatalogAction::LoadFailed {
                        generation,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Catalog(action));
        });
    }

    fn load_menu(&self, restaurant_id: &str, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let restaurant_id = restaurant_id.to_string();

        self.runtime.spawn(async move {
            let (details, menu) = tokio::join!(
                client.fetch_restaurant(&restaurant_id),
                client.fetch_menu(&restaurant_id)
            );
            // The menu decides success; missing details only cost the header
            let restaurant = match details {
                Ok(record) => Some(Restaurant::from(record)),
                Err(e) => {
                    log::warn!("ApiMiddleware: no details for {}: {}", restaurant_id, e);
                    None
                }
            };
            let action = match menu {
                Ok(items) => CatalogAction::MenuLoaded {
                    restaurant_id,
                    restaurant,
                    items,
                },
                Err(e) => {
                    log::error!("ApiMiddleware: failed to load menu {}: {}", restaurant_id, e);
                    CatalogAction::MenuFailed {
                        restaurant_id,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Catalog(action));
        });
    }

    fn login(&self, credentials: &LoginCredentials, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let credentials = credentials.clone();

        self.runtime.spawn(async move {
            let action = match client.login(&credentials).await {
                Ok(session) => SessionAction::LoggedIn(session),
                Err(e) => SessionAction::LoginFailed(e.to_string()),
            };
            dispatcher.dispatch(Action::Session(action));
        });
    }

    fn register(&self, data: &RegisterData, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let data = data.clone();

        self.runtime.spawn(async move {
            let action = match client.register(&data).await {
                Ok(session) => SessionAction::LoggedIn(session),
                Err(e) => SessionAction::RegisterFailed(e.to_string()),
            };
            dispatcher.dispatch(Action::Session(action));
        });
    }

    fn place_order(&self, draft: OrderDraft, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let action = match client.place_order(&draft).await {
                Ok(order) => OrderAction::Placed(order),
                Err(e) => {
                    log::error!("ApiMiddleware: failed to place order: {}", e);
                    OrderAction::Failed(e.to_string())
                }
            };
            dispatcher.dispatch(Action::Order(action));
        });
    }

    fn load_history(&self, user_id: Option<String>, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let action = match client.fetch_orders(user_id.as_deref()).await {
                Ok(orders) => OrderAction::HistoryLoaded(orders),
                Err(e) => {
                    log::error!("ApiMiddleware: failed to load orders: {}", e);
                    OrderAction::HistoryFailed(e.to_string())
                }
            };
            dispatcher.dispatch(Action::Order(action));
        });
    }

    /// Fetch one order, or change its status when `status` is given
    fn refresh_order(&self, id: &str, status: Option<OrderStatus>, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let id = id.to_string();

        self.runtime.spawn(async move {
            let result = match status {
                Some(status) => client.update_order_status(&id, status).await,
                None => client.fetch_order(&id).await,
            };
            let action = match result {
                Ok(order) => OrderAction::StatusUpdated(order),
                Err(e) => {
                    log::error!("ApiMiddleware: failed to refresh order {}: {}", id, e);
                    OrderAction::UpdateFailed(e.to_string())
                }
            };
            dispatcher.dispatch(Action::Order(action));
        });
    }
}

/// Reject status changes the order's known status does not allow
fn check_status_change(state: &AppState, id: &str, next: OrderStatus) -> Result<(), String> {
    match state.order.find(id) {
        Some(order) if !order.status.can_become(next) => Err(format!(
            "Order {} is {:?} and cannot become {:?}",
            id, order.status, next
        )),
        _ => Ok(()),
    }
}

/// Build the order draft for a checkout, or the message explaining why not
fn checkout_draft(
    state: &AppState,
    customer_name: &str,
    phone: &str,
    address: &str,
) -> Result<OrderDraft, String> {
    if state.cart.is_empty() {
        return Err("Your cart is empty".to_string());
    }
    if [customer_name, phone, address]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err("Name, phone and address are required".to_string());
    }

    let summary = state.cart.summary(state.checkout_fees());
    Ok(OrderDraft {
        user_id: state.session.user().map(|u| u.id.clone()),
        items: state.cart.order_lines(),
        total: summary.total,
        customer_name: customer_name.trim().to_string(),
        phone: phone.trim().to_string(),
        address: address.trim().to_string(),
    })
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Catalog(CatalogAction::LoadRequested) => {
                self.load_restaurants(state, dispatcher);
                false // Consumed; LoadStarted carries the generation to the reducer
            }

            // Any filter change re-queries the catalog once it has been reduced
            Action::Filter(_) => {
                dispatcher.dispatch(Action::Catalog(CatalogAction::LoadRequested));
                true
            }

            Action::Catalog(CatalogAction::MenuRequested(restaurant_id)) => {
                self.load_menu(restaurant_id, dispatcher);
                true
            }

            Action::Session(SessionAction::LoginRequested(credentials)) => {
                self.login(credentials, dispatcher);
                true
            }

            Action::Session(SessionAction::RegisterRequested(data)) => {
                self.register(data, dispatcher);
                true
            }

            Action::Order(OrderAction::HistoryRequested) => {
                let user_id = state.session.user().map(|u| u.id.clone());
                self.load_history(user_id, dispatcher);
                true
            }

            Action::Order(OrderAction::TrackRequested(id)) => {
                self.refresh_order(id, None, dispatcher);
                true
            }

            Action::Order(OrderAction::StatusUpdateRequested { id, status }) => {
                match check_status_change(state, id, *status) {
                    Ok(()) => {
                        self.refresh_order(id, Some(*status), dispatcher);
                        true
                    }
                    Err(message) => {
                        dispatcher.dispatch(Action::Ui(UiAction::SetError(Some(message))));
                        false
                    }
                }
            }

            Action::Order(OrderAction::Checkout {
                customer_name,
                phone,
                address,
            }) => {
                if state.order.submitting {
                    log::debug!("ApiMiddleware: checkout already in flight, ignoring");
                    return false;
                }
                match checkout_draft(state, customer_name, phone, address) {
                    Ok(draft) => {
                        log::info!(
                            "ApiMiddleware: placing order with {} lines, total {}",
                            draft.items.len(),
                            draft.total
                        );
                        self.place_order(draft, dispatcher);
                        true
                    }
                    Err(message) => {
                        dispatcher.dispatch(Action::Ui(UiAction::SetError(Some(message))));
                        false
                    }
                }
            }

            _ => true,
        }
    }
}
