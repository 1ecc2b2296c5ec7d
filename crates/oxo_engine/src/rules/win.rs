//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, WIN_LINES};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WIN_LINES`] order and the first fully owned
/// line decides. Returns `None` if no line is complete.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    scan(board)
}

/// Uninstrumented winner scan for the search hot path.
pub(crate) fn scan(board: &Board) -> Option<Player> {
    WIN_LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Returns the player holding all three cells of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Player> {
    let cells = board.cells();
    match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => Some(player),
        _ => None,
    }
}
