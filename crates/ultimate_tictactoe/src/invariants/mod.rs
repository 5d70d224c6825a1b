//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every
//! transition. The engine checks them on each candidate state in debug
//! builds; they are also testable on their own.

mod active_board_open;
mod balanced_marks;
mod phase_consistent;

pub use active_board_open::ActiveBoardOpenInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

use crate::engine::GameEngine;

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

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose as types.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2)>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

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

/// All engine invariants as one composable set.
pub type EngineInvariants = (
    BalancedMarksInvariant,
    ActiveBoardOpenInvariant,
    PhaseConsistentInvariant,
);

/// Convenience for `EngineInvariants::check_all`.
pub fn check_engine(engine: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
    EngineInvariants::check_all(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(check_engine(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        engine
            .apply_move(Position::Center, Position::TopLeft)
            .unwrap();
        engine
            .apply_move(Position::TopLeft, Position::Center)
            .unwrap();
        assert!(check_engine(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        // Two marks for X and none for O, with X still to move.
        engine.state.boards.board_mut(Position::Center).set(
            Position::TopLeft,
            crate::Square::Occupied(crate::Player::X),
        );
        engine.state.boards.board_mut(Position::Center).set(
            Position::TopRight,
            crate::Square::Occupied(crate::Player::X),
        );

        let violations = check_engine(&engine).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            BalancedMarksInvariant::description()
        );
    }
}
