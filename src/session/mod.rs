//! Async game session: drives a [`SequenceGame`], owns the reveal timers and
//! publishes [`GameEvent`]s to an observer.
//!
//! All methods that schedule a reveal must run inside a Tokio runtime.

pub mod events;
pub mod observer;
pub mod reveal;

use std::sync::Arc;

pub use events::GameEvent;
pub use observer::{GameObserver, TracingObserver};
pub use reveal::PendingReveal;

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::Symbol;
use crate::game::{InputOutcome, RngSource, SequenceGame, SymbolSource};

pub struct GameSession<S = RngSource> {
    game: SequenceGame<S>,
    config: GameConfig,
    observer: Arc<dyn GameObserver>,
    pending: Vec<PendingReveal>,
}

impl<S: SymbolSource> GameSession<S> {
    pub fn new(config: GameConfig, source: S, observer: Arc<dyn GameObserver>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            game: SequenceGame::new(&config, source),
            config,
            observer,
            pending: Vec::new(),
        })
    }

    pub fn game(&self) -> &SequenceGame<S> {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True while some reveal has not finished (or not started) yet
    pub fn has_pending_reveal(&self) -> bool {
        self.pending.iter().any(|p| !p.is_finished())
    }

    /// Start a new round, superseding any reveal still in flight
    pub fn start_new_game(&mut self) {
        self.cancel_reveals();

        let first = self.game.start_new_game();
        self.observer.notify(&GameEvent::NewGame {
            game_number: self.game.games_played(),
        });
        self.schedule_reveal(first);
    }

    /// Forward one player input to the game and publish what happened
    ///
    /// Game over cancels every reveal still in flight. Errors (no live
    /// round, round already over) publish nothing.
    pub fn submit_input(&mut self, symbol: Symbol) -> Result<InputOutcome> {
        let position = self.game.round().input_position().map_or(0, |p| p + 1);
        let outcome = self.game.submit_input(symbol)?;

        match outcome {
            InputOutcome::Continue => {
                self.observer
                    .notify(&GameEvent::InputAccepted { symbol, position });
            }
            InputOutcome::PassComplete {
                correct_count,
                next,
            } => {
                self.observer
                    .notify(&GameEvent::InputAccepted { symbol, position });
                self.observer
                    .notify(&GameEvent::PassComplete { correct_count });
                self.schedule_reveal(next);
            }
            InputOutcome::GameOver { score } => {
                self.cancel_reveals();
                self.observer.notify(&GameEvent::GameOver { score });
            }
        }

        Ok(outcome)
    }

    fn cancel_reveals(&mut self) {
        for pending in self.pending.drain(..) {
            pending.cancel();
        }
    }

    fn schedule_reveal(&mut self, symbol: Symbol) {
        self.pending.retain(|p| !p.is_finished());
        let index = self.game.sequence().len().saturating_sub(1);
        self.pending.push(PendingReveal::schedule(
            symbol,
            index,
            self.config.reveal_delay(),
            self.config.reveal_duration(),
            Arc::clone(&self.observer),
        ));
    }
}
