//! Move selection for the computer-controlled side.
//!
//! Every strategy works on a read-only board snapshot and proposes a cell
//! index; none of them mutates game state. [`MoveOracle`] picks the
//! strategy that matches a [`Difficulty`].

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::{Board, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move-selection policy.
pub trait Strategy {
    /// Proposes a cell index for `player` to play on `board`.
    ///
    /// Returns `None` when the strategy has nothing to offer.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// How strong the computer opponent plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Win, block, center, corner; random otherwise.
    Medium,
    /// Exhaustive minimax; never loses.
    #[default]
    Hard,
}

/// Dispatches move requests to the strategy behind each difficulty.
#[derive(Debug, Clone)]
pub struct MoveOracle {
    random: RandomStrategy,
    heuristic: HeuristicStrategy,
    minimax: MinimaxStrategy,
}

impl MoveOracle {
    /// Creates an oracle whose random choices are seeded from the OS.
    #[instrument]
    pub fn new() -> Self {
        Self::with_random(RandomStrategy::new())
    }

    /// Creates an oracle with reproducible random choices.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_random(RandomStrategy::seeded(seed))
    }

    fn with_random(random: RandomStrategy) -> Self {
        Self {
            random,
            heuristic: HeuristicStrategy,
            minimax: MinimaxStrategy,
        }
    }

    /// Selects a move for `player` at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoMoveAvailable`] if the board has no empty cell.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Result<usize, MoveError> {
        let (strategy, choice) = match difficulty {
            Difficulty::Easy => (self.random.name(), self.random.select_move(board, player)),
            Difficulty::Medium => match self.heuristic.select_move(board, player) {
                Some(index) => (self.heuristic.name(), Some(index)),
                None => (self.random.name(), self.random.select_move(board, player)),
            },
            Difficulty::Hard => (self.minimax.name(), self.minimax.select_move(board, player)),
        };

        match choice {
            Some(index) => {
                debug!(%player, %difficulty, strategy, index, "Oracle chose move");
                Ok(index)
            }
            None => Err(MoveError::NoMoveAvailable),
        }
    }
}

impl Default for MoveOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;
    use strum::IntoEnumIterator;

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        let mut oracle = MoveOracle::seeded(7);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                oracle.select_move(&board, Player::O, difficulty),
                Err(MoveError::NoMoveAvailable)
            );
        }
    }

    #[test]
    fn test_every_difficulty_picks_legal_moves() {
        let board: Board = "X.O .X. ...".parse().unwrap();
        let legal = legal_moves(&board);
        let mut oracle = MoveOracle::seeded(11);
        for difficulty in Difficulty::iter() {
            let index = oracle.select_move(&board, Player::O, difficulty).unwrap();
            assert!(legal.contains(&index), "{difficulty} chose {index}");
        }
    }

    #[test]
    fn test_medium_falls_back_to_random_on_edges() {
        // Center and corners taken, no line threatened: only edge 5 remains.
        let board: Board = "XOX XO. OXO".parse().unwrap();
        assert_eq!(HeuristicStrategy.select_move(&board, Player::X), None);

        let mut oracle = MoveOracle::seeded(3);
        assert_eq!(oracle.select_move(&board, Player::X, Difficulty::Medium), Ok(5));
    }

    #[test]
    fn test_difficulty_parse_and_display() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }
}
