//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Player, Token};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans all rows, all columns, and both diagonals. Returns
/// `Some(player)` if the player holds a full line, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let size = board.size();

    for row in 0..size {
        if let Some(player) = line_owner(board, (0..size).map(|col| (row, col))) {
            return Some(player);
        }
    }

    for col in 0..size {
        if let Some(player) = line_owner(board, (0..size).map(|row| (row, col))) {
            return Some(player);
        }
    }

    if let Some(player) = line_owner(board, (0..size).map(|idx| (idx, idx))) {
        return Some(player);
    }

    line_owner(board, (0..size).map(|idx| (idx, size - 1 - idx)))
}

/// The player holding every cell of the line, if any.
fn line_owner(board: &Board, mut cells: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
    let (row, col) = cells.next()?;
    let owner = board.get(row, col)?.player()?;

    for (row, col) in cells {
        if board.get(row, col).and_then(Token::player) != Some(owner) {
            return None;
        }
    }

    Some(owner)
}
