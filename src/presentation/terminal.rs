//! Terminal rendering of game events

use crossterm::style::{Color, Stylize};

use crate::core::error::Result;
use crate::core::types::Symbol;
use crate::presentation::feedback::{cue, headline, Cue};
use crate::session::events::GameEvent;
use crate::session::observer::GameObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per event
    Json,
}

/// Prints events to stdout
#[derive(Debug, Clone, Copy)]
pub struct TerminalObserver {
    format: OutputFormat,
}

impl TerminalObserver {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Text line for an event, without styling
    pub fn describe(event: &GameEvent) -> String {
        match event {
            GameEvent::NewGame { game_number } => format!("Game {} - watch closely", game_number),
            GameEvent::RevealStarted { symbol, index } => {
                format!("[{}] {}", index + 1, symbol.name().to_uppercase())
            }
            GameEvent::RevealEnded { .. } => "Your turn".to_string(),
            GameEvent::InputAccepted { symbol, position } => {
                format!("{} ok ({})", symbol, position + 1)
            }
            GameEvent::PassComplete { .. } | GameEvent::GameOver { .. } => {
                headline(event).unwrap_or_default()
            }
        }
    }

    fn print_text(&self, event: &GameEvent) {
        let line = Self::describe(event);
        match event {
            GameEvent::RevealStarted { symbol, .. } => {
                println!("{}", line.as_str().with(symbol_color(*symbol)).bold());
            }
            GameEvent::GameOver { .. } => println!("{}", line.as_str().red().bold()),
            _ => println!("{}", line),
        }
        if let Some(Cue::Fail) = cue(event) {
            println!("{}", "(wrong answer)".dark_grey());
        }
    }

    /// JSON line for an event
    pub fn render_json(event: &GameEvent) -> Result<String> {
        Ok(serde_json::to_string(event)?)
    }

    fn print_json(&self, event: &GameEvent) {
        match Self::render_json(event) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!("Failed to serialize {:?}: {}", event, e),
        }
    }
}

impl GameObserver for TerminalObserver {
    fn notify(&self, event: &GameEvent) {
        match self.format {
            OutputFormat::Text => self.print_text(event),
            OutputFormat::Json => self.print_json(event),
        }
    }
}

pub fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Green => Color::Green,
        Symbol::Red => Color::Red,
        Symbol::Blue => Color::Blue,
        Symbol::Yellow => Color::Yellow,
    }
}
