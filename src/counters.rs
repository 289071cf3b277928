//! Incremental win-detection counters.
//!
//! One marker count per player is kept for every row, every column, and
//! the two diagonals. A placement bumps the counts for the lines through
//! its cell, so a completed line is detected in O(1) per move instead of
//! rescanning the board.

use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// Per-player marker count for a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct LineCount([usize; Player::COUNT]);

impl LineCount {
    fn bump(&mut self, player: Player) {
        self.0[player.index()] += 1;
    }

    fn get(self, player: Player) -> usize {
        self.0[player.index()]
    }
}

/// Line counters for a board: `size` rows, `size` columns, and the two
/// diagonals, plus the total placement count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct LineCounters {
    rows: Vec<LineCount>,
    cols: Vec<LineCount>,
    /// Cells where `row == col`.
    diag_main: LineCount,
    /// Cells where `row + col == size - 1`.
    diag_anti: LineCount,
    placements: usize,
}

impl LineCounters {
    /// Zeroed counters for a board of the given side length.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            rows: vec![LineCount::default(); size],
            cols: vec![LineCount::default(); size],
            diag_main: LineCount::default(),
            diag_anti: LineCount::default(),
            placements: 0,
        }
    }

    fn size(&self) -> usize {
        self.rows.len()
    }

    /// Records a placement at `(row, col)` for `player`.
    ///
    /// The position must lie on the board.
    pub(crate) fn record(&mut self, player: Player, row: usize, col: usize) {
        self.rows[row].bump(player);
        self.cols[col].bump(player);
        if row == col {
            self.diag_main.bump(player);
        }
        if row + col + 1 == self.size() {
            self.diag_anti.bump(player);
        }
        self.placements += 1;
    }

    /// Checks if the placement at `(row, col)` completed a line for
    /// `player`.
    ///
    /// Counts only reach `size` on the completing move, so the diagonal
    /// checks cannot fire for a cell off the diagonals.
    pub(crate) fn line_completed(&self, player: Player, row: usize, col: usize) -> bool {
        let size = self.size();
        self.rows[row].get(player) == size
            || self.cols[col].get(player) == size
            || self.diag_main.get(player) == size
            || self.diag_anti.get(player) == size
    }

    /// Total number of markers placed.
    pub(crate) fn placements(&self) -> usize {
        self.placements
    }

    /// Reconstructs counters from scratch by scanning the board.
    pub(crate) fn rebuild(board: &Board) -> Self {
        let mut counters = Self::new(board.size());
        for row in 0..board.size() {
            for col in 0..board.size() {
                if let Some(player) = board.get(row, col).and_then(|token| token.player()) {
                    counters.record(player, row, col);
                }
            }
        }
        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_counters_start_zeroed() {
        let counters = LineCounters::new(3);

        for player in Player::iter() {
            for line in 0..3 {
                assert_eq!(counters.rows[line].get(player), 0);
                assert_eq!(counters.cols[line].get(player), 0);
            }
            assert_eq!(counters.diag_main.get(player), 0);
            assert_eq!(counters.diag_anti.get(player), 0);
        }
        assert_eq!(counters.placements(), 0);
    }

    #[test]
    fn test_record_updates_row_and_col() {
        let mut counters = LineCounters::new(3);
        counters.record(Player::X, 0, 2);

        assert_eq!(counters.rows[0].get(Player::X), 1);
        assert_eq!(counters.cols[2].get(Player::X), 1);
        assert_eq!(counters.rows[0].get(Player::O), 0);
        assert_eq!(counters.placements(), 1);
    }

    #[test]
    fn test_center_cell_feeds_both_diagonals() {
        let mut counters = LineCounters::new(3);
        counters.record(Player::O, 1, 1);

        assert_eq!(counters.diag_main.get(Player::O), 1);
        assert_eq!(counters.diag_anti.get(Player::O), 1);
    }

    #[test]
    fn test_corners_feed_one_diagonal_each() {
        let mut counters = LineCounters::new(3);
        counters.record(Player::X, 0, 0);
        counters.record(Player::X, 0, 2);

        assert_eq!(counters.diag_main.get(Player::X), 1);
        assert_eq!(counters.diag_anti.get(Player::X), 1);
    }

    #[test]
    fn test_line_completed_on_full_row() {
        let mut counters = LineCounters::new(3);
        counters.record(Player::X, 1, 0);
        counters.record(Player::X, 1, 1);
        assert!(!counters.line_completed(Player::X, 1, 1));

        counters.record(Player::X, 1, 2);
        assert!(counters.line_completed(Player::X, 1, 2));
        assert!(!counters.line_completed(Player::O, 1, 2));
    }

    #[test]
    fn test_rebuild_matches_incremental() {
        let mut board = Board::new(4);
        let mut counters = LineCounters::new(4);
        let placements = [
            (Player::X, 0, 0),
            (Player::O, 1, 3),
            (Player::X, 2, 2),
            (Player::O, 3, 0),
            (Player::X, 1, 2),
        ];
        for (player, row, col) in placements {
            board.set(row, col, Token::from(player)).unwrap();
            counters.record(player, row, col);
        }

        assert_eq!(LineCounters::rebuild(&board), counters);
    }
}
