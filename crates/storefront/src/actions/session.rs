//! Session actions

use storefront_client::{AuthSession, LoginCredentials, RegisterData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Authenticate with the given credentials (handled by the API middleware)
    LoginRequested(LoginCredentials),
    /// Create an account and sign in to it (handled by the API middleware)
    RegisterRequested(RegisterData),
    /// Signed in, by login or sign-up
    LoggedIn(AuthSession),
    LoginFailed(String),
    RegisterFailed(String),
    Logout,
}
