//! Counter consistency invariant: incremental counters match the board.

use crate::counters::LineCounters;
use crate::game::Game;
use crate::invariants::Invariant;

/// The incremental line counters agree with a full board rescan.
///
/// Rebuilding the counters from the board alone must reproduce the
/// incrementally maintained ones, placement count included. This is
/// the bridge between the O(1) win check and the O(N²) scan it
/// replaces.
pub struct CounterConsistentInvariant;

impl Invariant<Game> for CounterConsistentInvariant {
    fn holds(game: &Game) -> bool {
        LineCounters::rebuild(game.board()) == game.counters
    }

    fn description() -> &'static str {
        "Incremental line counters agree with a full board rescan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    #[test]
    fn test_holds_for_new_game() {
        let game = Game::new(3);
        assert!(CounterConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Game::new(4);
        game.place_marker(Token::X, 0, 0).unwrap();
        game.place_marker(Token::O, 3, 3).unwrap();
        game.place_marker(Token::X, 1, 2).unwrap();

        assert!(CounterConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_detects_unrecorded_marker() {
        let mut game = Game::new(3);
        game.place_marker(Token::X, 0, 0).unwrap();

        // A marker the counters never saw
        game.board.set(2, 2, Token::O).unwrap();

        assert!(!CounterConsistentInvariant::holds(&game));
    }
}
