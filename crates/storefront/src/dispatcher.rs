//! Dispatcher for middleware action dispatch
//!
//! Middleware never mutates state. When it needs to trigger a follow-up
//! (a load started, a response arrived) it sends the action through the
//! Dispatcher. The Store drains the channel on its own thread, so every queued
//! action re-enters the full middleware chain before reaching the reducer.
//!
//! The Dispatcher is `Clone + Send`, so tasks spawned on the middleware's
//! runtime can hold one and report their results when they finish.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
