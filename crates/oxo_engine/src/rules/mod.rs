//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session and the oracle can share them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full, outcome};
pub use moves::{apply, legal_moves};
pub use win::winner;
