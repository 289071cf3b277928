//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter,
)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Index into per-player counter arrays.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Marker symbol a board cell holds.
///
/// `Blank` is a valid cell value but not a valid marker to place;
/// passing it to [`Game::place_marker`](crate::Game::place_marker)
/// fails with [`PlaceError::InvalidToken`](crate::PlaceError::InvalidToken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Cross marker, rendered `X`.
    X,
    /// Naught marker, rendered `O`.
    O,
    /// Empty cell, rendered `-`.
    Blank,
}

impl Token {
    /// The player whose marker this is, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Token::X => Some(Player::X),
            Token::O => Some(Player::O),
            Token::Blank => None,
        }
    }

    /// Checks if the cell value is blank.
    pub fn is_blank(self) -> bool {
        matches!(self, Token::Blank)
    }
}

impl From<Player> for Token {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Token::X,
            Player::O => Token::O,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::X => write!(f, "X"),
            Token::O => write!(f, "O"),
            Token::Blank => write!(f, "-"),
        }
    }
}

/// Engine state: whose turn it is, or how the game ended.
///
/// `Won` and `Draw` are terminal; a terminal engine rejects every
/// further placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a move from the given player.
    Turn(Player),
    /// The given player completed a full line.
    Won(Player),
    /// Every cell is taken and no line is complete.
    Draw,
}

impl GameState {
    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Turn(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns the player to move if the game is still in progress.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GameState::Turn(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Turn(player) => write!(f, "{} to move", player),
            GameState::Won(player) => write!(f, "Player {} wins", player),
            GameState::Draw => write!(f, "Draw"),
        }
    }
}
