//! N×N tic-tac-toe rules engine with incremental win detection.
//!
//! This library is a self-contained, embeddable board engine: board
//! state, legal-move validation, turn management, and win/draw
//! detection for square boards of any size.
//!
//! # Architecture
//!
//! - **Engine**: the mutable [`Game`] owning board, counters, and state
//! - **Rules**: pure win/draw scans over a board ([`rules`])
//! - **Invariants**: first-class engine properties ([`invariants`])
//! - **Types**: players, tokens, game states, moves, and errors
//!
//! Win detection is O(1) per placement: the engine counts each
//! player's markers per row, column, and diagonal instead of
//! rescanning the board.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameState, Player, Token};
//!
//! let mut game = Game::new(3);
//! game.place_marker(Token::X, 0, 0)?;
//! game.place_marker(Token::O, 2, 1)?;
//! game.place_marker(Token::X, 1, 1)?;
//! game.place_marker(Token::O, 1, 2)?;
//! let state = game.place_marker(Token::X, 2, 2)?;
//!
//! assert_eq!(state, GameState::Won(Player::X));
//! # Ok::<(), tictactoe_engine::PlaceError>(())
//! ```
//!
//! The engine is a plain value with no interior locking; wrap it in a
//! mutex to share it across threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod counters;
mod game;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use game::Game;

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Moves and errors
pub use action::{Move, PlaceError};

// Crate-level exports - Core types
pub use types::{GameState, Player, Token};
