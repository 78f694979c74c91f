//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::SimonError;

/// One of the four colored controls the player can activate
///
/// Declaration order is the button order on the board; the alphabet of a
/// game is always a prefix of [`Symbol::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Green,
    Red,
    Blue,
    Yellow,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::Green, Symbol::Red, Symbol::Blue, Symbol::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Green => "green",
            Symbol::Red => "red",
            Symbol::Blue => "blue",
            Symbol::Yellow => "yellow",
        }
    }

    /// Position of this symbol on the board (0-based)
    pub fn index(&self) -> usize {
        match self {
            Symbol::Green => 0,
            Symbol::Red => 1,
            Symbol::Blue => 2,
            Symbol::Yellow => 3,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = SimonError;

    /// Accepts the full name or its first letter, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" | "g" => Ok(Symbol::Green),
            "red" | "r" => Ok(Symbol::Red),
            "blue" | "b" => Ok(Symbol::Blue),
            "yellow" | "y" => Ok(Symbol::Yellow),
            _ => Err(SimonError::UnknownSymbol(s.to_string())),
        }
    }
}

/// Number of correct guesses reported at game over
pub type Score = usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_letters() {
        assert_eq!("green".parse::<Symbol>().unwrap(), Symbol::Green);
        assert_eq!("R".parse::<Symbol>().unwrap(), Symbol::Red);
        assert_eq!(" Blue ".parse::<Symbol>().unwrap(), Symbol::Blue);
        assert_eq!("y".parse::<Symbol>().unwrap(), Symbol::Yellow);
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = "purple".parse::<Symbol>().unwrap_err();
        assert!(matches!(err, SimonError::UnknownSymbol(ref s) if s == "purple"));
    }

    #[test]
    fn test_index_matches_board_order() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Symbol::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }
}
