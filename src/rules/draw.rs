//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (no cell blank).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|token| !token.is_blank())
}

/// Checks if the game on this board is drawn.
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
