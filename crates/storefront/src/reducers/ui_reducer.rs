//! UI Visibility Reducer

use crate::actions::UiAction;
use crate::state::UiVisibilityState;

/// Reduce UI visibility actions
pub fn reduce_ui(mut state: UiVisibilityState, action: &UiAction) -> UiVisibilityState {
    match action {
        UiAction::ToggleCart => state.cart_open = !state.cart_open,
        UiAction::SetCartOpen(open) => state.cart_open = *open,
        UiAction::ToggleMenu => state.menu_open = !state.menu_open,
        UiAction::SetMenuOpen(open) => state.menu_open = *open,
        UiAction::SetCheckoutOpen(open) => state.checkout_open = *open,
        UiAction::SetActiveModal(modal) => state.active_modal = modal.clone(),
        UiAction::SetLoading { resource, loading } => state.set_loading(*resource, *loading),
        UiAction::SetError(error) => {
            if let Some(error) = error {
                log::warn!("UI error: {}", error);
            }
            state.error = error.clone();
        }
        UiAction::ClearError => state.error = None,
    }
    state
}
