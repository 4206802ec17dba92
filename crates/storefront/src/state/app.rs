//! Application State

use super::{
    CartState, CatalogState, CheckoutFees, FilterState, OrderState, SessionState,
    UiVisibilityState,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub cart: CartState,
    pub filters: FilterState,
    pub ui: UiVisibilityState,
    pub catalog: CatalogState,
    pub session: SessionState,
    pub order: OrderState,
    /// Application configuration
    pub app_config: storefront_config::AppConfig,
}

impl AppState {
    pub fn new(app_config: storefront_config::AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }

    /// Fees applied at checkout, from configuration
    pub fn checkout_fees(&self) -> CheckoutFees {
        CheckoutFees::from(&self.app_config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            cart: CartState::default(),
            filters: FilterState::default(),
            ui: UiVisibilityState::default(),
            catalog: CatalogState::default(),
            session: SessionState::default(),
            order: OrderState::default(),
            app_config: storefront_config::AppConfig::default(),
        }
    }
}
