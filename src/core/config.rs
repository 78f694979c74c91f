//! Game configuration
//!
//! The alphabet size is a gameplay parameter; the reveal timings are
//! presentation parameters consumed by the session, never by the core
//! sequence logic.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::core::error::{Result, SimonError};
use crate::core::types::Symbol;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How many of the four symbols take part in the game
    ///
    /// The classic board uses all four. Smaller values take a prefix of
    /// [`Symbol::ALL`], which makes sequences easier to remember.
    pub alphabet_size: usize,

    /// Delay between extending the sequence and flashing the new symbol (ms)
    ///
    /// Gives the player a beat between finishing a pass and the next reveal.
    pub reveal_delay_ms: u64,

    /// How long a revealed symbol stays lit (ms)
    pub reveal_duration_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet_size: Symbol::ALL.len(),
            reveal_delay_ms: 1000,
            reveal_duration_ms: 500,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The symbols in play for this configuration
    pub fn alphabet(&self) -> &'static [Symbol] {
        let all: &'static [Symbol] = &Symbol::ALL;
        &all[..self.alphabet_size.clamp(1, all.len())]
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size == 0 || self.alphabet_size > Symbol::ALL.len() {
            return Err(SimonError::InvalidConfig(format!(
                "alphabet_size ({}) must be between 1 and {}",
                self.alphabet_size,
                Symbol::ALL.len()
            )));
        }

        if self.reveal_duration_ms == 0 {
            return Err(SimonError::InvalidConfig(
                "reveal_duration_ms must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a config from a TOML string
    ///
    /// Missing keys fall back to their defaults.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }
}
