//! Structural invariants of a game state.
//!
//! Each invariant is a property every reachable [`GameState`] satisfies.
//! `apply_move` checks the full set in debug builds; tests use them to
//! detect corrupted states.

use super::state::GameState;
use super::types::Player;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the turn counter is one past the number of accepted moves.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.turn() == state.history().len() + 1
    }

    fn description() -> &'static str {
        "Turn counter equals accepted moves + 1"
    }
}

/// Invariant: X plays odd turns and O plays even turns.
///
/// While the game runs the player to move matches the turn parity; once it
/// ends the last mover stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.is_over() {
            Player::for_turn(state.turn().saturating_sub(1))
        } else {
            Player::for_turn(state.turn())
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: the board holds exactly the marks recorded in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        board.occupied() == state.history().len()
            && state.history().iter().enumerate().all(|(i, mv)| {
                board
                    .get(mv.row, mv.col)
                    .is_ok_and(|cell| cell.owner() == Some(Player::for_turn(i + 1)))
            })
    }

    fn description() -> &'static str {
        "Board marks match move history"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    TurnCountInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);
