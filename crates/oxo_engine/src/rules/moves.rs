//! Legal-move enumeration and move application.

use crate::{Board, CELL_COUNT, MoveError, Player};
use tracing::instrument;

/// Returns the indices of empty cells in ascending order.
#[instrument]
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..CELL_COUNT).filter(|&i| board.is_empty(i)).collect()
}

/// Returns a copy of `board` with `player`'s mark on `index`.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `index` is not in 0-8
/// - [`MoveError::Occupied`] if the cell already holds a mark
#[instrument]
pub fn apply(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    if index >= CELL_COUNT {
        return Err(MoveError::OutOfRange(index));
    }
    if !board.is_empty(index) {
        return Err(MoveError::Occupied(index));
    }

    let mut next = *board;
    next.place(index, player);
    Ok(next)
}
