//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Cell, GameOutcome};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner is a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// Classifies the board as won, drawn or still in progress.
#[instrument]
pub fn outcome(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(player) => GameOutcome::Won(player),
        None if is_full(board) => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}
