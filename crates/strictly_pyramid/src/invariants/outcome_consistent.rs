//! Outcome invariant: the cached outcome agrees with the board.

use super::Invariant;
use crate::geometry::BoardGeometry;
use crate::rules::has_line;
use crate::types::{GameState, Marker};

/// Invariant: a non-zero outcome names a marker that really has a line,
/// and a zero outcome means nobody has one.
pub struct OutcomeConsistentInvariant;

impl Invariant for OutcomeConsistentInvariant {
    fn holds(_geometry: &BoardGeometry, state: &GameState) -> bool {
        let board = state.board();
        let first = Marker::FIRST;
        let second = first.opponent();

        match state.cached_outcome() {
            0 => !has_line(board, first) && !has_line(board, second),
            1 => has_line(board, first),
            -1 => has_line(board, second),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Cached outcome matches the lines on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::geometry::Cell;

    #[test]
    fn test_opening_holds() {
        let engine = GameEngine::default();
        assert!(OutcomeConsistentInvariant::holds(
            engine.geometry(),
            &engine.initial_state()
        ));
    }

    #[test]
    fn test_won_state_holds() {
        let engine = GameEngine::default();
        let state = engine.replay(&[
            Cell::new(3, 1),
            Cell::new(3, 2),
            Cell::new(2, 1),
            Cell::new(3, 3),
            Cell::new(1, 1),
        ]);
        assert_eq!(state.cached_outcome(), 1);
        assert!(OutcomeConsistentInvariant::holds(engine.geometry(), &state));
    }

    #[test]
    fn test_unearned_outcome_violates() {
        let engine = GameEngine::default();
        let mut state = engine.apply(&engine.initial_state(), Cell::new(1, 1));
        state.cached_outcome = 1;
        assert!(!OutcomeConsistentInvariant::holds(engine.geometry(), &state));
    }

    #[test]
    fn test_out_of_range_outcome_violates() {
        let engine = GameEngine::default();
        let mut state = engine.initial_state();
        state.cached_outcome = 2;
        assert!(!OutcomeConsistentInvariant::holds(engine.geometry(), &state));
    }
}
