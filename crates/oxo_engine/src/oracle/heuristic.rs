//! Rule-based move selection: win, block, center, corner.

use super::Strategy;
use crate::rules::{legal_moves, win};
use crate::{Board, Player};
use tracing::debug;

/// The center cell.
const CENTER: usize = 4;

/// Corner cells in the order they are tried.
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Plays a fixed priority list of rules.
///
/// 1. Complete a line for the acting player.
/// 2. Block a line the opponent would complete next turn.
/// 3. Take the center.
/// 4. Take the lowest-indexed free corner.
///
/// When none applies the strategy returns `None` and the caller picks
/// among the remaining edge cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// First legal cell on which `player` would complete a line.
    fn winning_cell(board: &Board, moves: &[usize], player: Player) -> Option<usize> {
        moves.iter().copied().find(|&index| {
            let mut next = *board;
            next.place(index, player);
            win::scan(&next) == Some(player)
        })
    }
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let moves = legal_moves(board);

        if let Some(index) = Self::winning_cell(board, &moves, player) {
            debug!(%player, index, "Heuristic takes the win");
            return Some(index);
        }

        if let Some(index) = Self::winning_cell(board, &moves, player.opponent()) {
            debug!(%player, index, "Heuristic blocks");
            return Some(index);
        }

        if board.is_empty(CENTER) {
            return Some(CENTER);
        }

        CORNERS.iter().copied().find(|&index| board.is_empty(index))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(s: &str, player: Player) -> Option<usize> {
        let board: Board = s.parse().expect("valid board literal");
        HeuristicStrategy.select_move(&board, player)
    }

    #[test]
    fn test_takes_center_after_corner_opening() {
        assert_eq!(pick("X.. ... ...", Player::O), Some(4));
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        assert_eq!(pick("... ... ...", Player::X), Some(4));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O can win on 5; X threatens 2.
        assert_eq!(pick("XX. OO. X..", Player::O), Some(5));
    }

    #[test]
    fn test_blocks_opponent_line() {
        // X threatens the top row at 2.
        assert_eq!(pick("XX. .O. ...", Player::O), Some(2));
    }

    #[test]
    fn test_lowest_free_corner_after_center() {
        assert_eq!(pick("... .X. ...", Player::O), Some(0));
        assert_eq!(pick("O.. .X. ..X", Player::O), Some(2));
    }

    #[test]
    fn test_lowest_index_among_several_wins() {
        // X completes the left column at 6 or the top row at 2.
        assert_eq!(pick("XX. XO. .OO", Player::X), Some(2));
    }

    #[test]
    fn test_acts_for_either_side() {
        // X to move with its own win available on 8.
        assert_eq!(pick("XO. OX. ...", Player::X), Some(8));
    }

    #[test]
    fn test_none_when_only_edges_remain() {
        assert_eq!(pick("XOX XO. OXO", Player::X), None);
    }
}
