//! First-class invariants for pyramid tic-tac-toe.
//!
//! Invariants are properties every state produced by the engine must satisfy.
//! The engine checks them on the input of every move and, in debug builds,
//! on its output.

use crate::geometry::BoardGeometry;
use crate::types::GameState;

/// A property that must hold for a state on a given board.
pub trait Invariant {
    /// Checks whether the invariant holds for `state`.
    fn holds(geometry: &BoardGeometry, state: &GameState) -> bool;

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
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(geometry: &BoardGeometry, state: &GameState)
    -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<I: Invariant>(
    geometry: &BoardGeometry,
    state: &GameState,
    violations: &mut Vec<InvariantViolation>,
) {
    if !I::holds(geometry, state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<I1, I2, I3> InvariantSet for (I1, I2, I3)
where
    I1: Invariant,
    I2: Invariant,
    I3: Invariant,
{
    fn check_all(
        geometry: &BoardGeometry,
        state: &GameState,
    ) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<I1>(geometry, state, &mut violations);
        check_one::<I2>(geometry, state, &mut violations);
        check_one::<I3>(geometry, state, &mut violations);
        finish(violations)
    }
}

impl<I1, I2> InvariantSet for (I1, I2)
where
    I1: Invariant,
    I2: Invariant,
{
    fn check_all(
        geometry: &BoardGeometry,
        state: &GameState,
    ) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<I1>(geometry, state, &mut violations);
        check_one::<I2>(geometry, state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod cell_partition;
pub mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cell_partition::CellPartitionInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All pyramid invariants as a composable set.
pub type PyramidInvariants = (
    CellPartitionInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::geometry::Cell;
    use crate::types::Marker;

    #[test]
    fn test_invariant_set_holds_for_opening() {
        let engine = GameEngine::default();
        let state = engine.initial_state();
        assert!(PyramidInvariants::check_all(engine.geometry(), &state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = GameEngine::default();
        let state = engine.replay(&[Cell::new(3, 2), Cell::new(1, 1), Cell::new(4, 2)]);
        assert!(PyramidInvariants::check_all(engine.geometry(), &state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let engine = GameEngine::default();
        let mut state = engine.initial_state();
        // O appears on the board without X ever moving, and the cell stays listed.
        state.board.place(Cell::new(1, 1), Marker::O);

        let violations = PyramidInvariants::check_all(engine.geometry(), &state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::default();
        let state = engine.initial_state();

        type TwoInvariants = (CellPartitionInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(engine.geometry(), &state).is_ok());
    }
}
