//! Error types for the pyramid game model.

use crate::geometry::Cell;
use derive_more::{Display, Error};

/// A row-size profile that cannot describe a board.
///
/// This is the only hard failure in the crate: every other operation is
/// total once a geometry exists.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GeometryError {
    /// The profile has no rows.
    #[display("Row profile is empty")]
    EmptyProfile,

    /// A row was declared with zero cells (rows are numbered from 1).
    #[display("Row {} has no cells", row)]
    ZeroSizedRow {
        /// Row number, counted from the apex.
        row: usize,
    },
}

/// A serialized game state that cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// The cached outcome is not -1, 0 or +1.
    #[display("Cached outcome {} is not -1, 0 or 1", outcome)]
    OutcomeOutOfRange {
        /// The rejected value.
        outcome: i8,
    },
}

/// Reason a move cannot be applied to a state.
///
/// The engine never returns this to callers; it logs it and ignores the move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell is not part of the board.
    #[display("Cell {} is not on the board", _0)]
    OffBoard(Cell),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Cell),

    /// The cell is neither occupied nor listed among the remaining moves.
    #[display("Cell {} is not among the remaining moves", _0)]
    NotAvailable(Cell),

    /// The state itself breaks an invariant, e.g. it came from another board.
    #[display("Inconsistent state: {}", _0)]
    InconsistentState(String),

    /// A postcondition failed after the transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
