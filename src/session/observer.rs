//! The capability boundary between game logic and presentation

use tokio::sync::mpsc::UnboundedSender;

use crate::session::events::GameEvent;

/// Receives every [`GameEvent`] a session publishes
///
/// Called from reveal timer tasks as well as from the session owner, so
/// implementations must be thread-safe and must not block.
pub trait GameObserver: Send + Sync {
    fn notify(&self, event: &GameEvent);
}

impl GameObserver for UnboundedSender<GameEvent> {
    fn notify(&self, event: &GameEvent) {
        if self.send(*event).is_err() {
            tracing::warn!("Event receiver dropped, discarding {:?}", event);
        }
    }
}

/// Logs events and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&self, event: &GameEvent) {
        tracing::info!(?event, "game event");
    }
}
