//! Win detection for pyramid tic-tac-toe.
//!
//! Detection is local: after a move only the lines through the new cell are
//! walked, one axis at a time, outward in both directions.

use crate::geometry::{Cell, Direction};
use crate::types::{Board, Marker};
use tracing::{debug, instrument};

/// Markers in a row needed to win.
pub const WIN_LENGTH: usize = 3;

/// Length of the contiguous run of `marker` through `cell` along `direction`.
///
/// Counts both ways from `cell` and subtracts the doubly counted `cell`.
/// Returns 0 if `cell` does not hold `marker`.
pub fn run_length(board: &Board, cell: Cell, marker: Marker, direction: Direction) -> usize {
    let forward = count_from(board, cell, marker, direction, 1);
    let backward = count_from(board, cell, marker, direction, -1);
    (forward + backward).saturating_sub(1)
}

fn count_from(board: &Board, cell: Cell, marker: Marker, direction: Direction, sign: isize) -> usize {
    (0..)
        .map_while(|step: isize| cell.offset(direction, sign * step))
        .take_while(|&next| board.get(next) == Some(marker))
        .count()
}

/// First direction in which `marker` has a winning run through `cell`.
pub fn completes_line(board: &Board, cell: Cell, marker: Marker) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&direction| run_length(board, cell, marker, direction) >= WIN_LENGTH)
}

/// Outcome of `mover` having just played `cell`: `mover.sign()` if it
/// completed a line, 0 otherwise.
#[instrument(skip(board), fields(cell = %cell, mover = %mover))]
pub fn compute_outcome(board: &Board, cell: Cell, mover: Marker) -> i8 {
    match completes_line(board, cell, mover) {
        Some(direction) => {
            debug!(?direction, "Line completed");
            mover.sign()
        }
        None => 0,
    }
}

/// Whether `marker` has a line anywhere on the board.
///
/// Full scan; the engine never needs it.
pub fn has_line(board: &Board, marker: Marker) -> bool {
    board
        .cells_of(marker)
        .any(|cell| completes_line(board, cell, marker).is_some())
}
