//! UI visibility actions

use crate::state::Resource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleCart,
    SetCartOpen(bool),
    ToggleMenu,
    SetMenuOpen(bool),
    SetCheckoutOpen(bool),
    /// Open a named modal, or close the active one with `None`
    SetActiveModal(Option<String>),
    SetLoading { resource: Resource, loading: bool },
    SetError(Option<String>),
    ClearError,
}
