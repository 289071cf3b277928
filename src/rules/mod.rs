//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state by
//! rescanning the full grid. Rules are separated from board storage so
//! they compose into invariant checks; they are also the O(N²)
//! alternative to the engine's incremental counters.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
