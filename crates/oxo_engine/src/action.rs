//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index (0-8) receiving the mark.
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Broad category of a [`MoveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// The target cell is occupied or does not exist.
    InvalidMove,
    /// The session cannot accept this move right now.
    InvalidState,
    /// The oracle was asked to move on a full board.
    NoMoveAvailable,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn (waiting for {})", actual, expected)]
    OutOfTurn {
        /// The side to move.
        expected: Player,
        /// The side that attempted to move.
        actual: Player,
    },

    /// The player is controlled by the move oracle.
    #[display("Player {} is controlled by the computer", _0)]
    DelegatedPlayer(Player),

    /// The oracle found no legal move.
    #[display("No move available")]
    NoMoveAvailable,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoveError::OutOfRange(_) | MoveError::Occupied(_) => ErrorKind::InvalidMove,
            MoveError::GameOver
            | MoveError::OutOfTurn { .. }
            | MoveError::DelegatedPlayer(_)
            | MoveError::InvariantViolation(_) => ErrorKind::InvalidState,
            MoveError::NoMoveAvailable => ErrorKind::NoMoveAvailable,
        }
    }
}

impl std::error::Error for MoveError {}
