//! Reducers
//!
//! Pure functions `(state, &action) -> state`. `app_reducer::reduce` is the
//! root; it routes tagged actions to the slice reducers and applies the few
//! effects that span slices.

pub mod app_reducer;
pub mod cart_reducer;
pub mod catalog_reducer;
pub mod filter_reducer;
pub mod order_reducer;
pub mod session_reducer;
pub mod ui_reducer;
