//! Status text and sound cues derived from game events

use crate::core::types::Symbol;
use crate::session::events::GameEvent;

pub const RESTART_PROMPT: &str = "Press Any Key to Play Again..!";

/// Which sound the UI should play for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The tone belonging to a symbol
    Tone(Symbol),
    /// The wrong-answer sound
    Fail,
}

impl Cue {
    /// Audio sample name for this cue
    pub fn sample_name(&self) -> &'static str {
        match self {
            Cue::Tone(symbol) => symbol.name(),
            Cue::Fail => "sat-on-the-cat",
        }
    }
}

/// Headline to show for an event, if it changes the headline at all
pub fn headline(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::NewGame { game_number } if *game_number > 1 => Some(RESTART_PROMPT.to_string()),
        GameEvent::PassComplete { correct_count } => {
            Some(format!("Keep Going! Correct Count: {}", correct_count))
        }
        GameEvent::GameOver { score } => Some(format!("Game Over! You got {} right.", score)),
        _ => None,
    }
}

pub fn cue(event: &GameEvent) -> Option<Cue> {
    match event {
        GameEvent::RevealStarted { symbol, .. } | GameEvent::InputAccepted { symbol, .. } => {
            Some(Cue::Tone(*symbol))
        }
        GameEvent::GameOver { .. } => Some(Cue::Fail),
        _ => None,
    }
}
