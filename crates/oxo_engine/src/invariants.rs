//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every applied
//! move. The session checks them in debug builds; they can also be tested
//! independently.

use crate::{Player, SessionController, SessionState};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<SessionController> for BalancedMarksInvariant {
    fn holds(session: &SessionController) -> bool {
        let board = session.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: moves alternate starting with X, and the side to move
/// agrees with the marks on the board while the game is live.
pub struct AlternatingTurnInvariant;

impl Invariant<SessionController> for AlternatingTurnInvariant {
    fn holds(session: &SessionController) -> bool {
        let history = session.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }
        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        session.state() == SessionState::Terminal
            || session.to_move() == session.board().side_to_move()
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: every recorded move is on the board and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<SessionController> for HistoryConsistentInvariant {
    fn holds(session: &SessionController) -> bool {
        let board = session.board();
        let history = session.history();

        history.len() == board.filled()
            && history
                .iter()
                .all(|m| board.get(m.index).and_then(|c| c.player()) == Some(m.player))
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    BalancedMarksInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);
