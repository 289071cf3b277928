//! Alternating turn invariant: players strictly take turns, X first.

use crate::game::Game;
use crate::invariants::Invariant;
use crate::types::{GameState, Player};

/// Turns strictly alternate between the two players.
///
/// The first recorded move belongs to X, no player moves twice in a
/// row, and while the game is in progress the turn pointer matches the
/// parity of the move history.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if let GameState::Turn(to_move) = game.state() {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            if to_move != expected {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Players strictly alternate turns, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    #[test]
    fn test_holds_for_new_game() {
        let game = Game::new(3);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_holds_through_alternating_moves() {
        let mut game = Game::new(3);
        game.place_marker(Token::X, 0, 0).unwrap();
        game.place_marker(Token::O, 1, 1).unwrap();
        game.place_marker(Token::X, 2, 2).unwrap();

        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_detects_double_move() {
        let mut game = Game::new(3);
        game.place_marker(Token::X, 0, 0).unwrap();
        game.place_marker(Token::O, 1, 1).unwrap();

        // Rewrite history so O appears to have moved twice
        game.history[0].player = Player::O;

        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_detects_wrong_first_mover() {
        let mut game = Game::new(3);
        game.place_marker(Token::X, 0, 0).unwrap();

        game.history[0].player = Player::O;

        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_detects_stale_turn_pointer() {
        let mut game = Game::new(3);
        game.place_marker(Token::X, 0, 0).unwrap();

        // One move played, so O is to move, not X
        game.state = GameState::Turn(Player::X);

        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
