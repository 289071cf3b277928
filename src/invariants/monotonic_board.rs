//! Monotonic board invariant: cells are only ever filled, never cleared.

use crate::board::Board;
use crate::game::Game;
use crate::invariants::Invariant;
use crate::types::Token;

/// The board only gains markers.
///
/// Replaying the move history onto a blank board must land every move
/// on a blank cell and reproduce the current board exactly. Any cell
/// that was cleared or overwritten breaks the replay.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new(game.size());

        for mov in game.history() {
            if !replayed.is_blank(mov.row, mov.col) {
                return false;
            }
            if replayed.set(mov.row, mov.col, Token::from(mov.player)).is_err() {
                return false;
            }
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are only ever filled, never cleared or overwritten"
    }
}
