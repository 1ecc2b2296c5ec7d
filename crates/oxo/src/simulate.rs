//! Computer-versus-computer games for comparing difficulty levels.

use oxo_engine::rules::{apply, outcome};
use oxo_engine::{Board, Difficulty, GameOutcome, MoveError, MoveOracle, Player};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won(Player::X) => self.x_wins += 1,
            GameOutcome::Won(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// Total number of finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game between two difficulty levels.
fn play_game(oracle: &mut MoveOracle, x: Difficulty, o: Difficulty) -> Result<GameOutcome, MoveError> {
    let mut board = Board::new();
    let mut player = Player::X;
    loop {
        let result = outcome(&board);
        if result.is_terminal() {
            return Ok(result);
        }
        let difficulty = match player {
            Player::X => x,
            Player::O => o,
        };
        let index = oracle.select_move(&board, player, difficulty)?;
        board = apply(&board, index, player)?;
        player = player.opponent();
    }
}

/// Plays `games` games with `x` against `o` and counts the results.
#[instrument]
pub fn simulate(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<Tally, MoveError> {
    let mut oracle = match seed {
        Some(seed) => MoveOracle::seeded(seed),
        None => MoveOracle::new(),
    };

    let mut tally = Tally::default();
    for game in 0..games {
        let result = play_game(&mut oracle, x, o)?;
        debug!(game, %result, "Game finished");
        tally.record(result);
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_vs_hard_always_draws() {
        let tally = simulate(Difficulty::Hard, Difficulty::Hard, 3, Some(1)).unwrap();
        assert_eq!(tally, Tally { x_wins: 0, o_wins: 0, draws: 3 });
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let tally = simulate(Difficulty::Hard, Difficulty::Easy, 25, Some(2)).unwrap();
        assert_eq!(tally.games(), 25);
        assert_eq!(tally.o_wins, 0);

        let tally = simulate(Difficulty::Easy, Difficulty::Hard, 25, Some(3)).unwrap();
        assert_eq!(tally.x_wins, 0);
    }

    #[test]
    fn test_same_seed_same_results() {
        let a = simulate(Difficulty::Easy, Difficulty::Medium, 20, Some(4)).unwrap();
        let b = simulate(Difficulty::Easy, Difficulty::Medium, 20, Some(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tally_display() {
        let tally = Tally { x_wins: 2, o_wins: 1, draws: 3 };
        assert_eq!(tally.to_string(), "X wins: 2, O wins: 1, draws: 3");
    }
}
