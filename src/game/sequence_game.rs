//! The sequence-matching state machine
//!
//! `Idle -> Playing -> (PassComplete -> Playing) | GameOver`. Game over is
//! only left through [`SequenceGame::start_new_game`].

use crate::core::config::GameConfig;
use crate::core::error::{Result, SimonError};
use crate::core::types::{Score, Symbol};
use crate::game::source::{RngSource, SymbolSource};

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round has been started yet
    Idle,
    Playing,
    /// The last round ended on a mismatch; inert until restarted
    GameOver { score: Score },
}

/// Result of a single player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Correct so far, more symbols expected this pass
    Continue,
    /// The whole sequence was reproduced and one symbol was appended
    PassComplete { correct_count: usize, next: Symbol },
    /// Mismatch; `score` is the number of correct guesses earlier in the pass
    GameOver { score: Score },
}

/// Sequence and progress through the current pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    sequence: Vec<Symbol>,
    /// Symbols matched so far in this pass
    matched: usize,
}

impl RoundState {
    pub fn sequence(&self) -> &[Symbol] {
        &self.sequence
    }

    /// Index of the last correctly reproduced symbol in this pass
    ///
    /// `None` until the first correct guess of a pass.
    pub fn input_position(&self) -> Option<usize> {
        self.matched.checked_sub(1)
    }

    /// Symbol the player has to enter next
    pub fn expected(&self) -> Option<Symbol> {
        self.sequence.get(self.matched).copied()
    }

    fn reset(&mut self) {
        self.sequence.clear();
        self.matched = 0;
    }

    fn push(&mut self, symbol: Symbol) {
        self.sequence.push(symbol);
        self.matched = 0;
    }
}

/// A memory game over a growing random sequence
pub struct SequenceGame<S = RngSource> {
    alphabet: &'static [Symbol],
    source: S,
    round: RoundState,
    phase: Phase,
    games_played: u32,
}

impl SequenceGame<RngSource> {
    /// Game with the default four-symbol alphabet and an entropy-seeded RNG
    pub fn with_entropy() -> Self {
        Self::new(&GameConfig::default(), RngSource::from_entropy())
    }
}

impl<S: SymbolSource> SequenceGame<S> {
    pub fn new(config: &GameConfig, source: S) -> Self {
        Self {
            alphabet: config.alphabet(),
            source,
            round: RoundState::default(),
            phase: Phase::Idle,
            games_played: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn sequence(&self) -> &[Symbol] {
        self.round.sequence()
    }

    pub fn input_position(&self) -> Option<usize> {
        self.round.input_position()
    }

    pub fn expected(&self) -> Option<Symbol> {
        match self.phase {
            Phase::Playing => self.round.expected(),
            _ => None,
        }
    }

    pub fn alphabet(&self) -> &'static [Symbol] {
        self.alphabet
    }

    /// Rounds started since this game object was created
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn is_live(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Discard any current round and start a fresh one-symbol sequence
    ///
    /// Returns the first symbol, which the caller should reveal.
    pub fn start_new_game(&mut self) -> Symbol {
        self.round.reset();
        self.phase = Phase::Playing;
        self.games_played += 1;
        tracing::info!("Starting game {}", self.games_played);
        self.append_draw()
    }

    /// Append one freshly drawn symbol to the live round and restart the pass
    ///
    /// Returns the appended symbol. An idle or finished game is left untouched.
    pub fn extend_sequence(&mut self) -> Result<Symbol> {
        match self.phase {
            Phase::Idle => Err(SimonError::NoLiveRound),
            Phase::GameOver { score } => Err(SimonError::RoundOver { score }),
            Phase::Playing => Ok(self.append_draw()),
        }
    }

    fn append_draw(&mut self) -> Symbol {
        let symbol = self.source.draw(self.alphabet);
        self.round.push(symbol);
        tracing::debug!("Sequence extended: {:?}", self.round.sequence());
        symbol
    }

    /// Check one player input against the sequence
    pub fn submit_input(&mut self, symbol: Symbol) -> Result<InputOutcome> {
        match self.phase {
            Phase::Idle => return Err(SimonError::NoLiveRound),
            Phase::GameOver { score } => return Err(SimonError::RoundOver { score }),
            Phase::Playing => {}
        }

        let position = self.round.matched;
        if self.round.expected() != Some(symbol) {
            self.phase = Phase::GameOver { score: position };
            tracing::info!(
                "Game over: got {:?}, expected {:?} (score {})",
                symbol,
                self.round.expected(),
                position
            );
            return Ok(InputOutcome::GameOver { score: position });
        }

        self.round.matched += 1;
        if self.round.matched < self.round.sequence.len() {
            return Ok(InputOutcome::Continue);
        }

        let correct_count = self.round.sequence.len();
        let next = self.append_draw();
        tracing::debug!("Pass complete with {} correct", correct_count);
        Ok(InputOutcome::PassComplete {
            correct_count,
            next,
        })
    }
}
