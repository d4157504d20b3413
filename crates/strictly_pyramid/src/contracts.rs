//! Contract-based validation for pyramid tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare style: {P} action {Q}. The engine checks the precondition on every
//! move and the postcondition in debug builds.

use crate::error::MoveError;
use crate::geometry::{BoardGeometry, Cell};
use crate::invariants::{InvariantSet, InvariantViolation, PyramidInvariants};
use crate::types::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for placing a marker on a board.
pub trait Contract {
    /// Checks preconditions before playing `cell`.
    fn pre(geometry: &BoardGeometry, state: &GameState, cell: Cell) -> Result<(), MoveError>;

    /// Checks postconditions after the move.
    fn post(geometry: &BoardGeometry, before: &GameState, after: &GameState)
    -> Result<(), MoveError>;
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ─────────────────────────────────────────────────────────────
//  State Precondition
// ─────────────────────────────────────────────────────────────

/// Precondition: the state satisfies every [`PyramidInvariants`] on this board.
///
/// Engine-built states always pass. Restored snapshots and states from an
/// engine with another profile may not.
pub struct StateConsistent;

impl StateConsistent {
    /// Fails with [`MoveError::InconsistentState`] naming each broken invariant.
    pub fn check(geometry: &BoardGeometry, state: &GameState) -> Result<(), MoveError> {
        PyramidInvariants::check_all(geometry, state)
            .map_err(|violations| MoveError::InconsistentState(describe(&violations)))
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell lies on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Fails with [`MoveError::OffBoard`] for cells outside the geometry.
    pub fn check(geometry: &BoardGeometry, cell: Cell) -> Result<(), MoveError> {
        if geometry.contains(cell) {
            Ok(())
        } else {
            Err(MoveError::OffBoard(cell))
        }
    }
}

/// Precondition: the cell holds no marker.
pub struct CellUnoccupied;

impl CellUnoccupied {
    /// Fails with [`MoveError::Occupied`] if a marker already sits on `cell`.
    pub fn check(state: &GameState, cell: Cell) -> Result<(), MoveError> {
        if state.board().is_occupied(cell) {
            Err(MoveError::Occupied(cell))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell is listed among the remaining moves.
pub struct CellAvailable;

impl CellAvailable {
    /// Fails with [`MoveError::NotAvailable`] if `cell` is not a remaining move.
    pub fn check(state: &GameState, cell: Cell) -> Result<(), MoveError> {
        if state.remaining_moves().contains(&cell) {
            Ok(())
        } else {
            Err(MoveError::NotAvailable(cell))
        }
    }
}

/// Composite precondition: a move is legal if it is a remaining move of a
/// consistent state.
///
/// The narrower checks run first so the error says why.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(geometry, state), fields(cell = %cell))]
    pub fn check(geometry: &BoardGeometry, state: &GameState, cell: Cell) -> Result<(), MoveError> {
        StateConsistent::check(geometry, state)?;
        CellOnBoard::check(geometry, cell)?;
        CellUnoccupied::check(state, cell)?;
        CellAvailable::check(state, cell)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a marker.
///
/// Preconditions:
/// - State satisfies all [`PyramidInvariants`]
/// - Cell is on the board, unoccupied and remaining
///
/// Postconditions:
/// - Exactly one cell moved from remaining to occupied
/// - All [`PyramidInvariants`] hold on the new state
pub struct MoveContract;

impl Contract for MoveContract {
    fn pre(geometry: &BoardGeometry, state: &GameState, cell: Cell) -> Result<(), MoveError> {
        LegalMove::check(geometry, state, cell)
    }

    fn post(
        geometry: &BoardGeometry,
        before: &GameState,
        after: &GameState,
    ) -> Result<(), MoveError> {
        let placed = after.board().len() == before.board().len() + 1
            && after.remaining_moves().len() + 1 == before.remaining_moves().len();
        if !placed {
            warn!("Transition did not move exactly one cell");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one cell must be placed".to_string(),
            ));
        }

        PyramidInvariants::check_all(geometry, after).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
