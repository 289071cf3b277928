//! N×N board storage and rendering.

use crate::action::PlaceError;
use crate::types::Token;
use serde::{Deserialize, Serialize};

const UNDERLINE_ON: &str = "\u{1b}[4m";
const UNDERLINE_OFF: &str = "\u{1b}[0m";

/// N×N tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length of the grid.
    size: usize,
    /// Cells in row-major order (`size * size` entries).
    cells: Vec<Token>,
}

impl Board {
    /// Creates a blank board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Token::Blank; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks if a position lies on the board.
    pub fn in_range(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at the given position, or `None` when out of range.
    ///
    /// A deserialized board may hold fewer cells than its size promises;
    /// missing cells read as out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Token> {
        if !self.in_range(row, col) {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Sets the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::PositionOutOfRange`] when the position lies
    /// off the board.
    pub fn set(&mut self, row: usize, col: usize, token: Token) -> Result<(), PlaceError> {
        if !self.in_range(row, col) {
            return Err(PlaceError::PositionOutOfRange(row, col));
        }
        match self.cells.get_mut(row * self.size + col) {
            Some(cell) => {
                *cell = token;
                Ok(())
            }
            None => Err(PlaceError::PositionOutOfRange(row, col)),
        }
    }

    /// Checks if the cell at the given position is blank.
    ///
    /// Positions off the board are not blank.
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Token::Blank))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Token] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    ///
    /// A size 0 board yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Formats the board with underlined 1-based column headers and
    /// 1-based row labels.
    pub fn render(&self) -> String {
        let headers = (1..=self.size)
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let mut lines = vec![format!("{UNDERLINE_ON} | {headers}{UNDERLINE_OFF}")];
        for (idx, row) in self.rows().enumerate() {
            let cells = row
                .iter()
                .map(Token::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("{}| {}", idx + 1, cells));
        }
        lines.join("\n")
    }
}
