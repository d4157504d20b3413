//! Alternating turn invariant: markers alternate X, O, X, O, ...

use super::Invariant;
use crate::geometry::BoardGeometry;
use crate::types::{GameState, Marker};

/// Invariant: players alternate turns, first marker opening.
///
/// The first marker has placed as many markers as the second or one more,
/// and the active player is whoever is behind.
pub struct AlternatingTurnInvariant;

impl Invariant for AlternatingTurnInvariant {
    fn holds(_geometry: &BoardGeometry, state: &GameState) -> bool {
        let first = state.board().count(Marker::FIRST);
        let second = state.board().count(Marker::FIRST.opponent());

        if first == second {
            state.active_player() == Marker::FIRST
        } else if first == second + 1 {
            state.active_player() == Marker::FIRST.opponent()
        } else {
            false
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
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
        assert!(AlternatingTurnInvariant::holds(
            engine.geometry(),
            &engine.initial_state()
        ));
    }

    #[test]
    fn test_single_move_holds() {
        let engine = GameEngine::default();
        let state = engine.apply(&engine.initial_state(), Cell::new(3, 2));
        assert!(AlternatingTurnInvariant::holds(engine.geometry(), &state));
        assert_eq!(state.active_player(), Marker::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let engine = GameEngine::default();
        let mut state = engine.apply(&engine.initial_state(), Cell::new(3, 2));
        state.board.place(Cell::new(1, 1), Marker::X);
        assert!(!AlternatingTurnInvariant::holds(engine.geometry(), &state));
    }

    #[test]
    fn test_wrong_active_player_violates() {
        let engine = GameEngine::default();
        let mut state = engine.initial_state();
        state.active_player = Marker::O;
        assert!(!AlternatingTurnInvariant::holds(engine.geometry(), &state));
    }
}
