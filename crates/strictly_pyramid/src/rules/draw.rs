//! Draw detection for pyramid tic-tac-toe.

use crate::types::GameState;
use tracing::instrument;

/// Whether every cell is occupied.
#[instrument(skip(state))]
pub fn is_full(state: &GameState) -> bool {
    state.remaining_moves().is_empty()
}

/// A full board on which nobody completed a line.
#[instrument(skip(state))]
pub fn is_draw(state: &GameState) -> bool {
    is_full(state) && state.cached_outcome() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cell;

    #[test]
    fn test_opening_not_full() {
        let state = GameState::opening(&[Cell::new(1, 1), Cell::new(2, 1)]);
        assert!(!is_full(&state));
        assert!(!is_draw(&state));
    }

    #[test]
    fn test_empty_remaining_without_line_is_draw() {
        let state = GameState::opening(&[]);
        assert!(is_full(&state));
        assert!(is_draw(&state));
    }

    #[test]
    fn test_won_full_board_not_draw() {
        let mut state = GameState::opening(&[]);
        state.cached_outcome = -1;
        assert!(is_full(&state));
        assert!(!is_draw(&state));
    }
}
