//! Game session controller.
//!
//! The controller owns the only mutable game state. It validates moves
//! against the rules, applies them, detects the end of the game and plays
//! the computer-controlled side through the [`MoveOracle`]. Presentation
//! layers never touch the board; they subscribe a [`SessionObserver`] and
//! react to what it is told.

#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::oracle::{Difficulty, MoveOracle};
use crate::rules;
use crate::{Board, GameOutcome, Move, MoveError, Player};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Who plays each side.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two people share the board.
    HumanVsHuman,
    /// One side is played by the move oracle.
    #[default]
    HumanVsAi,
}

/// In-memory session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Who plays each side.
    pub mode: Mode,
    /// Strength of the computer side.
    pub difficulty: Difficulty,
    /// The side the computer plays in [`Mode::HumanVsAi`].
    pub ai_player: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            ai_player: Player::O,
        }
    }
}

/// Phase of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the side to move.
    AwaitingMove,
    /// The game is won or drawn; only `reset` is accepted.
    Terminal,
}

/// Callbacks for presentation layers. Every method defaults to a no-op.
pub trait SessionObserver {
    /// The board changed (a move was applied or the game was reset).
    fn on_board_changed(&mut self, _board: &Board) {}

    /// A new side is to move.
    fn on_turn_changed(&mut self, _player: Player) {}

    /// The game reached a terminal outcome.
    fn on_game_ended(&mut self, _outcome: GameOutcome) {}
}

/// Observer callbacks as plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// See [`SessionObserver::on_board_changed`].
    BoardChanged(Board),
    /// See [`SessionObserver::on_turn_changed`].
    TurnChanged(Player),
    /// See [`SessionObserver::on_game_ended`].
    GameEnded(GameOutcome),
}

/// Forwards every callback into a channel.
///
/// A dropped receiver only means nobody is listening any more.
impl SessionObserver for mpsc::Sender<SessionEvent> {
    fn on_board_changed(&mut self, board: &Board) {
        if self.send(SessionEvent::BoardChanged(*board)).is_err() {
            debug!("Event receiver dropped");
        }
    }

    fn on_turn_changed(&mut self, player: Player) {
        if self.send(SessionEvent::TurnChanged(player)).is_err() {
            debug!("Event receiver dropped");
        }
    }

    fn on_game_ended(&mut self, outcome: GameOutcome) {
        if self.send(SessionEvent::GameEnded(outcome)).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// State of one game, replaced wholesale on reset.
#[derive(Debug, Clone)]
pub(crate) struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: GameOutcome,
    pub(crate) history: Vec<Move>,
}

impl Game {
    fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }
}

/// Owns a game, enforces turn order and drives the computer side.
pub struct SessionController {
    pub(crate) game: Game,
    config: SessionConfig,
    oracle: MoveOracle,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("game", &self.game)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Creates a session with an entropy-seeded oracle.
    ///
    /// The board starts empty with X to move. Nothing is played yet, not
    /// even when the computer owns X: call [`reset`](Self::reset) after
    /// subscribing to start the game and receive the opening events.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_oracle(config, MoveOracle::new())
    }

    /// Creates a session with an explicit oracle (e.g. a seeded one).
    #[instrument(skip(oracle))]
    pub fn with_oracle(config: SessionConfig, oracle: MoveOracle) -> Self {
        info!(mode = %config.mode, difficulty = %config.difficulty, "Creating game session");
        Self {
            game: Game::new(),
            config,
            oracle,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for board, turn and end-of-game callbacks.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.game.board
    }

    /// Returns the side to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.game.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.game.outcome
    }

    /// Returns the state-machine phase.
    pub fn state(&self) -> SessionState {
        if self.outcome().is_terminal() {
            SessionState::Terminal
        } else {
            SessionState::AwaitingMove
        }
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.game.history
    }

    /// Returns the session settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// True if `player` is played by the oracle under the current settings.
    pub fn is_delegated(&self, player: Player) -> bool {
        self.config.mode == Mode::HumanVsAi && player == self.config.ai_player
    }

    /// Plays `index` for `player`, then lets the oracle reply if it is its turn.
    ///
    /// Returns the outcome after every resulting move has been applied.
    ///
    /// # Errors
    ///
    /// Rejects the call and leaves the session unchanged when the game is
    /// over, when `player` is not the side to move or is played by the
    /// oracle, or when `index` is out of range or occupied.
    #[instrument(skip(self), fields(board = %self.game.board))]
    pub fn submit_move(&mut self, index: usize, player: Player) -> Result<GameOutcome, MoveError> {
        if self.state() == SessionState::Terminal {
            warn!(index, %player, "Move submitted after game over");
            return Err(MoveError::GameOver);
        }

        let expected = self.to_move();
        if player != expected {
            warn!(index, %player, %expected, "Player tried to move out of turn");
            return Err(MoveError::OutOfTurn {
                expected,
                actual: player,
            });
        }

        if self.is_delegated(player) {
            warn!(index, %player, "Move submitted for the computer's side");
            return Err(MoveError::DelegatedPlayer(player));
        }

        let outcome = self.play(index, player)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        self.advance()
    }

    /// Starts a fresh game: empty board, X to move.
    ///
    /// Valid from any state. Settings and observers are kept. If the
    /// oracle plays X it opens immediately.
    ///
    /// # Errors
    ///
    /// Only propagates oracle failures, which an empty board cannot cause.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<GameOutcome, MoveError> {
        info!(previous = %self.outcome(), "Resetting game");
        self.game = Game::new();

        let board = self.game.board;
        self.notify(|o| o.on_board_changed(&board));
        self.notify(|o| o.on_turn_changed(Player::X));

        self.advance()
    }

    /// Changes mode and difficulty without clearing the board.
    ///
    /// # Errors
    ///
    /// If the change hands the side to move to the oracle in a live game,
    /// the oracle moves at once and its errors are propagated.
    #[instrument(skip(self))]
    pub fn configure(&mut self, mode: Mode, difficulty: Difficulty) -> Result<GameOutcome, MoveError> {
        self.apply_config(SessionConfig {
            mode,
            difficulty,
            ..self.config
        })
    }

    /// Replaces all settings, including which side the oracle plays.
    ///
    /// # Errors
    ///
    /// See [`configure`](Self::configure).
    #[instrument(skip(self))]
    pub fn apply_config(&mut self, config: SessionConfig) -> Result<GameOutcome, MoveError> {
        info!(
            mode = %config.mode,
            difficulty = %config.difficulty,
            ai_player = %config.ai_player,
            "Session configured"
        );
        self.config = config;
        self.advance()
    }

    /// Lets the oracle move for as long as it owns the side to move.
    fn advance(&mut self) -> Result<GameOutcome, MoveError> {
        while self.state() == SessionState::AwaitingMove && self.is_delegated(self.to_move()) {
            let player = self.to_move();
            let index = self
                .oracle
                .select_move(&self.game.board, player, self.config.difficulty)?;
            self.play(index, player)?;
        }
        Ok(self.outcome())
    }

    /// Applies a validated move and emits the resulting events.
    fn play(&mut self, index: usize, player: Player) -> Result<GameOutcome, MoveError> {
        let board = rules::apply(&self.game.board, index, player).inspect_err(|e| {
            warn!(index, %player, error = %e, "Invalid move");
        })?;

        let outcome = rules::outcome(&board);
        let next = player.opponent();
        let mut history = self.game.history.clone();
        history.push(Move::new(player, index));
        let game = Game {
            board,
            to_move: if outcome.is_terminal() { player } else { next },
            outcome,
            history,
        };
        let previous = std::mem::replace(&mut self.game, game);

        if let Err(e) = self.check_invariants() {
            warn!(index, %player, error = %e, "Move rolled back");
            self.game = previous;
            return Err(e);
        }

        info!(index, %player, "Move applied");
        self.notify(|o| o.on_board_changed(&board));

        if outcome.is_terminal() {
            info!(%outcome, moves = self.game.history.len(), "Game over");
            self.notify(|o| o.on_game_ended(outcome));
        } else {
            self.notify(|o| o.on_turn_changed(next));
        }

        Ok(outcome)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) -> Result<(), MoveError> {
        Ok(())
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn SessionObserver)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
