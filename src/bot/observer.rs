//! Hooks for watching a session.
//!
//! The engine reports what it sees to an [`Observer`]. The default,
//! [`TracingObserver`], turns everything into log events; tests plug in
//! their own to record what happened.

use super::registry::HandlerKind;
use super::SessionState;
use slircbot_proto::Message;
use tracing::{debug, info, warn};

/// Receives session events. Every method defaults to doing nothing.
pub trait Observer: Send + Sync {
    /// A line was parsed and is about to be dispatched.
    fn on_message(&self, _msg: &Message) {}

    /// The session moved between states.
    fn on_state_change(&self, _from: SessionState, _to: SessionState) {}

    /// A handler failed; its error text is being sent as the reply.
    fn on_handler_error(&self, _handler: HandlerKind<'_>, _msg: &Message, _error: &anyhow::Error) {}
}

/// Logs session events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_message(&self, msg: &Message) {
        if msg.is_empty() {
            debug!("Ignoring line without command");
        } else {
            debug!(line = %msg, "Received");
        }
    }

    fn on_state_change(&self, from: SessionState, to: SessionState) {
        info!(?from, ?to, "Session state changed");
    }

    fn on_handler_error(&self, handler: HandlerKind<'_>, msg: &Message, error: &anyhow::Error) {
        warn!(
            %handler,
            sender = msg.nickname().unwrap_or("*"),
            error = format!("{error:#}"),
            "Handler failed"
        );
    }
}
