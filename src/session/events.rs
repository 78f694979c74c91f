//! Notifications published to the presentation layer

use serde::Serialize;

use crate::core::types::{Score, Symbol};

/// Something the presentation layer may want to show or play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A round was started; `game_number` counts from 1
    NewGame { game_number: u32 },

    /// Light up `symbol`, which sits at `index` in the sequence
    RevealStarted { symbol: Symbol, index: usize },
    RevealEnded { symbol: Symbol, index: usize },

    /// The player entered the expected symbol at `position`
    InputAccepted { symbol: Symbol, position: usize },
    PassComplete { correct_count: usize },
    GameOver { score: Score },
}
