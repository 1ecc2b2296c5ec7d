//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Scores are from the acting player's point of view and depth-aware:
//! a win `depth` plies after the candidate move scores `10 - depth`, a
//! loss scores `depth - 10` and a draw scores `0`. Faster wins and slower
//! losses are therefore preferred. Boards are passed by value, so every
//! node works on its own snapshot and nothing needs restoring on a cutoff.

use super::Strategy;
use crate::rules::{legal_moves, win};
use crate::{Board, CELL_COUNT, Player};
use tracing::{debug, instrument};

/// Base score of a win found at depth zero.
const WIN_SCORE: i32 = 10;

/// Perfect-play strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Scores every legal move for `player`, in ascending cell order.
    ///
    /// Each root move is searched with a full window so the returned
    /// scores are exact, not bounds.
    #[instrument(skip(board), fields(board = %board))]
    pub fn evaluate(board: &Board, player: Player) -> Vec<(usize, i32)> {
        legal_moves(board)
            .into_iter()
            .map(|index| {
                let mut child = *board;
                child.place(index, player);
                let score = search(child, player, false, 0, i32::MIN, i32::MAX);
                (index, score)
            })
            .collect()
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (index, score) in Self::evaluate(board, player) {
            // Strictly greater: the lowest index keeps ties.
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        if let Some((index, score)) = best {
            debug!(%player, index, score, "Minimax best move");
        }
        best.map(|(index, _)| index)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Scores `board` for `me`, alternating maximizing and minimizing layers.
fn search(
    board: Board,
    me: Player,
    maximizing: bool,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match win::scan(&board) {
        Some(winner) if winner == me => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }
    if board.filled() == CELL_COUNT {
        return 0;
    }

    let mover = if maximizing { me } else { me.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }
        let mut child = board;
        child.place(index, mover);
        let score = search(child, me, !maximizing, depth + 1, alpha, beta);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
