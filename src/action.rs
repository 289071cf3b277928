//! First-class placement records and validation errors.
//!
//! Moves are domain events, not side effects: each successful placement
//! is recorded in the engine history and can be replayed to verify the
//! board.

use crate::types::{Player, Token};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A resolved placement: a player's marker written at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed the marker.
    pub player: Player,
    /// Row of the placement (0-based).
    pub row: usize,
    /// Column of the placement (0-based).
    pub col: usize,
}

impl Move {
    /// Creates a new placement record.
    #[instrument]
    pub fn new(player: Player, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Error rejecting a `place_marker` call.
///
/// Validation failures are reported immediately and leave the engine
/// unchanged; none are retried or recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The token is not a player marker.
    #[display("{} is not an accepted token", _0)]
    InvalidToken(Token),

    /// The position lies off the board.
    #[display("Position ({}, {}) exceeds board range", _0, _1)]
    PositionOutOfRange(usize, usize),

    /// The cell already holds a marker.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    CellOccupied(usize, usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}
