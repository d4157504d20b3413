//! Cell partition invariant: every cell is either occupied or remaining.

use super::Invariant;
use crate::geometry::BoardGeometry;
use crate::types::GameState;

/// Invariant: occupied and remaining cells partition the board.
///
/// Occupied cells lie on the board, and the remaining moves are exactly the
/// unoccupied cells in canonical order.
pub struct CellPartitionInvariant;

impl Invariant for CellPartitionInvariant {
    fn holds(geometry: &BoardGeometry, state: &GameState) -> bool {
        let board = state.board();
        if !board.iter().all(|(cell, _)| geometry.contains(cell)) {
            return false;
        }

        geometry
            .canonical_coordinates()
            .iter()
            .filter(|&&cell| !board.is_occupied(cell))
            .eq(state.remaining_moves().iter())
    }

    fn description() -> &'static str {
        "Occupied and remaining cells partition the board in canonical order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::geometry::Cell;
    use crate::types::Marker;

    #[test]
    fn test_opening_holds() {
        let engine = GameEngine::default();
        assert!(CellPartitionInvariant::holds(
            engine.geometry(),
            &engine.initial_state()
        ));
    }

    #[test]
    fn test_moves_hold() {
        let engine = GameEngine::default();
        let state = engine.replay(&[Cell::new(5, 1), Cell::new(2, 2)]);
        assert!(CellPartitionInvariant::holds(engine.geometry(), &state));
    }

    #[test]
    fn test_off_board_marker_violates() {
        let engine = GameEngine::default();
        let mut state = engine.initial_state();
        state.board.place(Cell::new(9, 9), Marker::X);
        assert!(!CellPartitionInvariant::holds(engine.geometry(), &state));
    }

    #[test]
    fn test_reordered_remaining_violates() {
        let engine = GameEngine::default();
        let mut state = engine.initial_state();
        state.remaining_moves.swap(0, 1);
        assert!(!CellPartitionInvariant::holds(engine.geometry(), &state));
    }

    #[test]
    fn test_dropped_cell_violates() {
        let engine = GameEngine::default();
        let mut state = engine.initial_state();
        state.remaining_moves.pop();
        assert!(!CellPartitionInvariant::holds(engine.geometry(), &state));
    }
}
