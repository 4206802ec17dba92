use crate::actions::{Action, CatalogAction, GlobalAction, OrderAction, SessionAction};
use crate::reducers::{
    cart_reducer::reduce_cart, catalog_reducer::reduce_catalog, filter_reducer::reduce_filter,
    order_reducer::reduce_order, session_reducer::reduce_session, ui_reducer::reduce_ui,
};
use crate::state::{AppState, LoadingState, Resource};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Cart(action) => {
            state.cart = reduce_cart(state.cart, action);
        }
        Action::Filter(action) => {
            state.filters = reduce_filter(state.filters, action);
        }
        Action::Ui(action) => {
            state.ui = reduce_ui(state.ui, action);
        }
        Action::Catalog(action) => {
            state.catalog = reduce_catalog(state.catalog, action);
            state = apply_catalog_effects(state, action);
        }
        Action::Session(action) => {
            state.session = reduce_session(state.session, action);
            state = apply_session_effects(state, action);
        }
        Action::Order(action) => {
            state.order = reduce_order(state.order, action);
            state = apply_order_effects(state, action);
        }
        Action::None => {}
    }
    state
}

/// Mirror catalog status into the UI slice
fn apply_catalog_effects(mut state: AppState, action: &CatalogAction) -> AppState {
    state
        .ui
        .set_loading(Resource::Restaurants, state.catalog.is_loading());
    state
        .ui
        .set_loading(Resource::Menu, state.catalog.is_menu_loading());

    match action {
        CatalogAction::MenuRequested(_) => state.ui.menu_open = true,
        CatalogAction::CloseMenu => state.ui.menu_open = false,
        CatalogAction::LoadFailed { generation, error }
            if *generation == state.catalog.latest_generation =>
        {
            state.ui.error = Some(format!("Could not load restaurants: {}", error));
        }
        CatalogAction::MenuFailed {
            restaurant_id,
            error,
        } if state
            .catalog
            .menu
            .as_ref()
            .is_some_and(|m| m.restaurant_id == *restaurant_id) =>
        {
            state.ui.error = Some(format!("Could not load menu: {}", error));
        }
        _ => {}
    }
    state
}

fn apply_session_effects(mut state: AppState, action: &SessionAction) -> AppState {
    match action {
        SessionAction::LoginRequested(_) | SessionAction::RegisterRequested(_) => {
            state.ui.set_loading(Resource::Auth, true);
        }
        SessionAction::LoggedIn(_) => {
            state.ui.set_loading(Resource::Auth, false);
            state.ui.active_modal = None;
        }
        SessionAction::LoginFailed(error) => {
            // The login modal stays open so the customer can retry
            state.ui.set_loading(Resource::Auth, false);
            state.ui.error = Some(format!("Login failed: {}", error));
        }
        SessionAction::RegisterFailed(error) => {
            state.ui.set_loading(Resource::Auth, false);
            state.ui.error = Some(format!("Sign up failed: {}", error));
        }
        SessionAction::Logout => {
            // Order history belongs to the signed-out customer
            state.order.history.clear();
            state.order.history_status = LoadingState::Idle;
            state.ui.set_loading(Resource::Orders, state.order.is_busy());
        }
    }
    state
}

fn apply_order_effects(mut state: AppState, action: &OrderAction) -> AppState {
    state.ui.set_loading(Resource::Orders, state.order.is_busy());

    match action {
        OrderAction::Placed(_) => {
            state.cart.clear();
            state.ui.checkout_open = false;
            state.ui.cart_open = false;
        }
        OrderAction::Failed(error) => {
            state.ui.error = Some(format!("Checkout failed: {}", error));
        }
        OrderAction::HistoryFailed(error) => {
            state.ui.error = Some(format!("Could not load orders: {}", error));
        }
        OrderAction::UpdateFailed(error) => {
            state.ui.error = Some(format!("Could not update order: {}", error));
        }
        _ => {}
    }
    state
}
