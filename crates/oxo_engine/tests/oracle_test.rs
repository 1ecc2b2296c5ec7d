//! Tests for move selection strength.

use oxo_engine::rules::{apply, legal_moves, outcome};
use oxo_engine::{
    Board, Difficulty, GameOutcome, HeuristicStrategy, MinimaxStrategy, MoveOracle, Player,
    RandomStrategy, Strategy,
};

/// Plays every possible opponent line against minimax and returns how
/// many finished games were reached. Panics if minimax ever loses.
fn explore(board: Board, to_move: Player, engine: Player) -> usize {
    match outcome(&board) {
        GameOutcome::Won(winner) => {
            assert_eq!(winner, engine, "minimax lost on\n{board}");
            return 1;
        }
        GameOutcome::Draw => return 1,
        GameOutcome::InProgress => {}
    }

    if to_move == engine {
        let index = MinimaxStrategy
            .select_move(&board, engine)
            .expect("move available in a live game");
        let next = apply(&board, index, engine).expect("minimax plays legal moves");
        explore(next, to_move.opponent(), engine)
    } else {
        legal_moves(&board)
            .into_iter()
            .map(|index| {
                let next = apply(&board, index, to_move).expect("legal move");
                explore(next, to_move.opponent(), engine)
            })
            .sum()
    }
}

/// Plays a full game between two strategies and returns the outcome.
fn play(x: &mut dyn Strategy, o: &mut dyn Strategy) -> GameOutcome {
    let mut board = Board::new();
    let mut player = Player::X;
    loop {
        let result = outcome(&board);
        if result != GameOutcome::InProgress {
            return result;
        }
        let strategy: &mut dyn Strategy = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let index = strategy
            .select_move(&board, player)
            .or_else(|| legal_moves(&board).first().copied())
            .expect("move available in a live game");
        board = apply(&board, index, player).expect("legal move");
        player = player.opponent();
    }
}

#[test]
fn test_minimax_as_x_never_loses() {
    let games = explore(Board::new(), Player::X, Player::X);
    assert!(games > 0);
}

#[test]
fn test_minimax_as_o_never_loses() {
    let games = explore(Board::new(), Player::X, Player::O);
    assert!(games > 0);
}

#[test]
fn test_minimax_vs_minimax_draws() {
    assert_eq!(play(&mut MinimaxStrategy, &mut MinimaxStrategy), GameOutcome::Draw);
}

#[test]
fn test_minimax_punishes_random_play() {
    let mut wins = 0;
    for seed in 0..20 {
        let mut random = RandomStrategy::seeded(seed);
        match play(&mut MinimaxStrategy, &mut random) {
            GameOutcome::Won(Player::X) => wins += 1,
            GameOutcome::Draw => {}
            other => panic!("minimax did not hold with seed {seed}: {other:?}"),
        }
    }
    assert!(wins > 0, "minimax never exploited a random opponent");
}

#[test]
fn test_heuristic_answers_corner_with_center() {
    let board = apply(&Board::new(), 0, Player::X).unwrap();
    assert_eq!(HeuristicStrategy.select_move(&board, Player::O), Some(4));
}

#[test]
fn test_hard_oracle_matches_minimax() {
    let board: Board = "X.. .O. ..X".parse().unwrap();
    let mut oracle = MoveOracle::seeded(5);
    assert_eq!(
        oracle.select_move(&board, Player::O, Difficulty::Hard).ok(),
        MinimaxStrategy.select_move(&board, Player::O)
    );
}

#[test]
fn test_seeded_oracles_agree() {
    let board = Board::new();
    let mut a = MoveOracle::seeded(99);
    let mut b = MoveOracle::seeded(99);
    for _ in 0..10 {
        assert_eq!(
            a.select_move(&board, Player::X, Difficulty::Easy),
            b.select_move(&board, Player::X, Difficulty::Easy)
        );
    }
}
