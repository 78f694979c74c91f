//! Property tests for sequence growth and scoring (pure game logic).
//!
//! Properties tested:
//! - Sequence length is one more than the number of completed passes
//! - Correct input short of the end never changes the sequence
//! - A mismatch scores exactly the correct guesses made earlier in the pass

use proptest::prelude::*;

use simon::core::config::GameConfig;
use simon::core::types::Symbol;
use simon::game::{InputOutcome, ScriptedSource, SequenceGame};

fn symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(Symbol::ALL.to_vec())
}

fn wrong_for(expected: Symbol) -> Symbol {
    Symbol::ALL[(expected.index() + 1) % Symbol::ALL.len()]
}

/// Start a game and complete `passes` passes without mistakes
fn play_passes(draws: Vec<Symbol>, passes: usize) -> SequenceGame<ScriptedSource> {
    let mut game = SequenceGame::new(&GameConfig::default(), ScriptedSource::new(draws));
    game.start_new_game();
    for _ in 0..passes {
        let sequence = game.sequence().to_vec();
        for symbol in sequence {
            game.submit_input(symbol).unwrap();
        }
    }
    game
}

proptest! {
    /// Property: length == completed passes + 1
    #[test]
    fn prop_length_follows_passes(
        draws in prop::collection::vec(symbol(), 1..8),
        passes in 0usize..12,
    ) {
        let game = play_passes(draws, passes);
        prop_assert_eq!(game.sequence().len(), passes + 1);
        prop_assert_eq!(game.input_position(), None);
    }

    /// Property: a correct prefix leaves the sequence untouched
    #[test]
    fn prop_continue_keeps_sequence(
        draws in prop::collection::vec(symbol(), 1..8),
        passes in 1usize..10,
        cut in any::<usize>(),
    ) {
        let mut game = play_passes(draws, passes);
        let sequence = game.sequence().to_vec();
        let prefix = cut % (sequence.len() - 1) + 1;

        for symbol in &sequence[..prefix] {
            prop_assert_eq!(game.submit_input(*symbol).unwrap(), InputOutcome::Continue);
        }
        prop_assert_eq!(game.sequence(), sequence.as_slice());
    }

    /// Property: score equals the correct guesses before the mismatch
    #[test]
    fn prop_mismatch_scores_prior_guesses(
        draws in prop::collection::vec(symbol(), 1..8),
        passes in 0usize..10,
        cut in any::<usize>(),
    ) {
        let mut game = play_passes(draws, passes);
        let sequence = game.sequence().to_vec();
        let fail_at = cut % sequence.len();

        for symbol in &sequence[..fail_at] {
            game.submit_input(*symbol).unwrap();
        }
        let outcome = game.submit_input(wrong_for(sequence[fail_at])).unwrap();
        prop_assert_eq!(outcome, InputOutcome::GameOver { score: fail_at });
    }
}
