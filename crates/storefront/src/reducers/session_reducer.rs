//! Session Reducer

use crate::actions::SessionAction;
use crate::state::SessionState;

/// Reduce session actions
pub fn reduce_session(mut state: SessionState, action: &SessionAction) -> SessionState {
    match action {
        SessionAction::LoginRequested(_) | SessionAction::RegisterRequested(_) => {}
        SessionAction::LoggedIn(session) => {
            log::info!("Session: logged in as {}", session.user.email);
            state.session = Some(session.clone());
        }
        SessionAction::LoginFailed(error) => {
            log::warn!("Session: login failed: {}", error);
        }
        SessionAction::RegisterFailed(error) => {
            log::warn!("Session: sign-up failed: {}", error);
        }
        SessionAction::Logout => {
            log::info!("Session: logged out");
            state.session = None;
        }
    }
    state
}
