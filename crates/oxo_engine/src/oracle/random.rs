//! Uniformly random move selection.

use super::Strategy;
use crate::rules::legal_moves;
use crate::{Board, Player};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a strategy with a fixed seed for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _player: Player) -> Option<usize> {
        legal_moves(board).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::X),
                b.select_move(&board, Player::X)
            );
        }
    }

    #[test]
    fn test_only_legal_cells() {
        let board: Board = "XOX OX. ...".parse().unwrap();
        let legal = legal_moves(&board);
        let mut strategy = RandomStrategy::seeded(1);
        for _ in 0..50 {
            let index = strategy.select_move(&board, Player::O).unwrap();
            assert!(legal.contains(&index));
        }
    }

    #[test]
    fn test_reaches_every_legal_cell() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let mut seen = [false; 9];
        let mut strategy = RandomStrategy::seeded(9);
        for _ in 0..500 {
            if let Some(index) = strategy.select_move(&board, Player::X) {
                seen[index] = true;
            }
        }
        for index in legal_moves(&board) {
            assert!(seen[index], "cell {index} never chosen");
        }
        assert!(!seen[0] && !seen[4]);
    }

    #[test]
    fn test_full_board_yields_none() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(RandomStrategy::seeded(0).select_move(&board, Player::X), None);
    }
}
