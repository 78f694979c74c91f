//! Sequence generation and input validation

pub mod sequence_game;
pub mod source;

pub use sequence_game::{InputOutcome, Phase, RoundState, SequenceGame};
pub use source::{RngSource, ScriptedSource, SymbolSource};
