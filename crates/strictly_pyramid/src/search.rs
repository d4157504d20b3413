//! Capability interface for adversarial search.
//!
//! A minimax or alpha-beta player needs only these operations, so it can be
//! written once over [`AdversarialGame`] and pointed at any conforming model.

use crate::engine::GameEngine;
use crate::geometry::Cell;
use crate::types::{GameState, Marker};

/// A two-player, zero-sum, perfect-information game as seen by a search.
///
/// Utilities follow the maximizing convention: positive is good for the
/// player asked about.
pub trait AdversarialGame {
    /// Immutable game position.
    type State;
    /// A move that can be offered to [`AdversarialGame::apply`].
    type Move: Copy;
    /// A participant.
    type Player: Copy + Eq;

    /// Player to move in `state`.
    fn to_move(&self, state: &Self::State) -> Self::Player;

    /// Moves available from `state`.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// The state reached by playing `action` in `state`.
    fn apply(&self, state: &Self::State, action: Self::Move) -> Self::State;

    /// Whether the game is over in `state`.
    fn terminal_test(&self, state: &Self::State) -> bool;

    /// Value of `state` to `player`.
    fn utility(&self, state: &Self::State, player: Self::Player) -> i8;
}

impl AdversarialGame for GameEngine {
    type State = GameState;
    type Move = Cell;
    type Player = Marker;

    fn to_move(&self, state: &GameState) -> Marker {
        state.active_player()
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Cell> {
        GameEngine::legal_moves(self, state).to_vec()
    }

    fn apply(&self, state: &GameState, action: Cell) -> GameState {
        GameEngine::apply(self, state, action)
    }

    fn terminal_test(&self, state: &GameState) -> bool {
        GameEngine::terminal_test(self, state)
    }

    fn utility(&self, state: &GameState, player: Marker) -> i8 {
        GameEngine::utility(self, state, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_legal<G: AdversarialGame>(game: &G, state: &G::State) -> Option<G::Move> {
        game.legal_moves(state).first().copied()
    }

    #[test]
    fn test_trait_matches_inherent_operations() {
        let engine = GameEngine::default();
        let state = engine.initial_state();

        let action = first_legal(&engine, &state).unwrap();
        assert_eq!(action, Cell::new(1, 1));

        let via_trait = AdversarialGame::apply(&engine, &state, action);
        assert_eq!(via_trait, engine.apply(&state, action));
        assert_eq!(AdversarialGame::to_move(&engine, &via_trait), Marker::O);
        assert!(!AdversarialGame::terminal_test(&engine, &via_trait));
        assert_eq!(AdversarialGame::utility(&engine, &via_trait, Marker::X), 0);
    }
}
