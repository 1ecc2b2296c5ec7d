//! Tic-tac-toe decision engine.
//!
//! This crate holds everything about the game that is not presentation:
//!
//! - **Board model**: [`Board`], [`Cell`], [`Player`] and the [`WIN_LINES`] table
//! - **Rules**: [`rules::winner`], [`rules::is_draw`], [`rules::legal_moves`], [`rules::apply`]
//! - **Move oracle**: random, heuristic and minimax [`Strategy`] implementations
//!   behind a [`Difficulty`]-driven [`MoveOracle`]
//! - **Session**: the [`SessionController`] state machine, which owns the game
//!   and reports to a [`SessionObserver`]
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Difficulty, GameOutcome, Mode, Player, SessionConfig, SessionController};
//!
//! let mut session = SessionController::new(SessionConfig {
//!     mode: Mode::HumanVsAi,
//!     difficulty: Difficulty::Hard,
//!     ai_player: Player::O,
//! });
//!
//! // X takes a corner, the oracle answers in the center.
//! let outcome = session.submit_move(0, Player::X)?;
//! assert_eq!(outcome, GameOutcome::InProgress);
//! assert_eq!(session.history().len(), 2);
//! assert_eq!(session.history()[1].index, 4);
//! # Ok::<(), oxo_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
pub mod oracle;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{ErrorKind, Move, MoveError};
pub use oracle::{
    Difficulty, HeuristicStrategy, MinimaxStrategy, MoveOracle, RandomStrategy, Strategy,
};
pub use position::Position;
pub use session::{
    Mode, SessionConfig, SessionController, SessionEvent, SessionObserver, SessionState,
};
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, GameOutcome, Player, WIN_LINES};
