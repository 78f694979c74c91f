//! Timed reveal of a single sequence step

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::core::types::Symbol;
use crate::session::events::GameEvent;
use crate::session::observer::GameObserver;

/// A scheduled flash of one symbol
///
/// Waits `delay`, publishes `RevealStarted`, waits `duration`, publishes
/// `RevealEnded`. Dropping the handle cancels whatever has not fired yet.
pub struct PendingReveal {
    symbol: Symbol,
    index: usize,
    handle: JoinHandle<()>,
}

impl PendingReveal {
    /// Spawn the reveal on the current Tokio runtime
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn schedule(
        symbol: Symbol,
        index: usize,
        delay: Duration,
        duration: Duration,
        observer: Arc<dyn GameObserver>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            observer.notify(&GameEvent::RevealStarted { symbol, index });
            tokio::time::sleep(duration).await;
            observer.notify(&GameEvent::RevealEnded { symbol, index });
        });
        Self {
            symbol,
            index,
            handle,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        if !self.is_finished() {
            tracing::debug!("Cancelling reveal of {} at {}", self.symbol, self.index);
        }
        // Drop aborts the task
    }
}

impl Drop for PendingReveal {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
