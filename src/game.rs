//! Mutable game engine for N×N tic-tac-toe.
//!
//! The engine owns the board, the incremental line counters, and the
//! turn/outcome state machine. Every placement is validated before any
//! mutation, so a rejected move leaves the engine untouched.

use crate::action::{Move, PlaceError};
use crate::board::Board;
use crate::counters::LineCounters;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::{GameState, Player, Token};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// N×N tic-tac-toe game engine.
///
/// Win detection is O(1) per placement: instead of rescanning the
/// board, the engine counts each player's markers per row, per column,
/// and per diagonal, and a move wins exactly when one of the lines
/// through it reaches the board size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) counters: LineCounters,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a new game on a blank `size` × `size` board, X to move.
    ///
    /// Size is not validated: a size 0 board rejects every placement as
    /// out of range, and a size 1 board ends on the first placement.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            counters: LineCounters::new(size),
            state: GameState::Turn(Player::X),
            history: Vec::new(),
        }
    }
}

impl Default for Game {
    /// Creates a standard 3×3 game.
    fn default() -> Self {
        Self::new(3)
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the current board.
    ///
    /// The copy is detached: later moves do not affect it.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Renders the board as text, column headers underlined and rows
    /// labeled from 1.
    pub fn render(&self) -> String {
        self.board.render()
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Places `token` at (`row`, `col`) and returns the resulting state.
    ///
    /// Validation runs before any mutation; a rejected move leaves the
    /// board, counters, state, and history untouched. After a move the
    /// state becomes `Won` for the mover, `Draw` on a full board, or
    /// the opponent's turn.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] if the game has already ended.
    /// - [`PlaceError::InvalidToken`] if `token` is [`Token::Blank`].
    /// - [`PlaceError::PositionOutOfRange`] if (`row`, `col`) is off the board.
    /// - [`PlaceError::CellOccupied`] if the cell already holds a marker.
    /// - [`PlaceError::WrongTurn`] if it is the other player's turn.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn place_marker(
        &mut self,
        token: Token,
        row: usize,
        col: usize,
    ) -> Result<GameState, PlaceError> {
        // Reject anything once the game has ended
        let GameState::Turn(to_move) = self.state else {
            return Err(PlaceError::GameOver);
        };

        // Only player markers may be placed
        let Some(player) = token.player() else {
            return Err(PlaceError::InvalidToken(token));
        };

        if !self.board.in_range(row, col) {
            return Err(PlaceError::PositionOutOfRange(row, col));
        }

        if !self.board.is_blank(row, col) {
            return Err(PlaceError::CellOccupied(row, col));
        }

        if player != to_move {
            return Err(PlaceError::WrongTurn(player));
        }

        // Apply the move
        self.board.set(row, col, token)?;
        self.counters.record(player, row, col);
        self.history.push(Move::new(player, row, col));

        // Win takes precedence over draw on a full board
        self.state = if self.counters.line_completed(player, row, col) {
            GameState::Won(player)
        } else if self.counters.placements() == self.size() * self.size() {
            GameState::Draw
        } else {
            GameState::Turn(player.opponent())
        };

        self.assert_invariants();

        Ok(self.state)
    }

    /// Resets the game to a blank board of the same size, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.size());
    }

    /// Asserts that all engine invariants hold (panic on violation in
    /// debug builds).
    fn assert_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "engine invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}
