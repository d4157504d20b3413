//! Transition and evaluation logic for pyramid tic-tac-toe.

use crate::config::PyramidConfig;
use crate::contracts::{Contract, MoveContract};
use crate::error::GeometryError;
use crate::geometry::{BoardGeometry, Cell};
use crate::rules;
use crate::types::{GameState, Marker};
use tracing::{debug, instrument};

/// Pyramid tic-tac-toe engine.
///
/// Holds only the board geometry. States are passed in and fresh states are
/// returned, so one engine can serve any number of concurrent searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    geometry: BoardGeometry,
}

impl GameEngine {
    /// Creates an engine for the given board.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self { geometry }
    }

    /// Creates an engine from row sizes listed from the apex downward.
    ///
    /// # Errors
    ///
    /// Fails if the profile is empty or has an empty row.
    #[instrument]
    pub fn from_profile(profile: &[usize]) -> Result<Self, GeometryError> {
        BoardGeometry::new(profile).map(Self::new)
    }

    /// Creates an engine from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configured profile is malformed.
    #[instrument(skip(config))]
    pub fn from_config(config: &PyramidConfig) -> Result<Self, GeometryError> {
        config.geometry().map(Self::new)
    }

    /// The board this engine plays on.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Empty board, first marker to move, every cell available in canonical order.
    #[instrument(skip(self))]
    pub fn initial_state(&self) -> GameState {
        GameState::opening(self.geometry.canonical_coordinates())
    }

    /// Moves available from `state`.
    ///
    /// Maintained by [`GameEngine::apply`], so no recomputation happens here.
    pub fn legal_moves<'s>(&self, state: &'s GameState) -> &'s [Cell] {
        state.remaining_moves()
    }

    /// Plays `cell` for the active player and returns the resulting state.
    ///
    /// A cell that is not among the remaining moves is ignored: the input
    /// state comes back unchanged. So is any move on a state that breaks the
    /// board's invariants, such as one built for a different profile. The outcome is computed only from lines
    /// through `cell`. If `state` already carries an outcome, the child keeps
    /// it.
    #[instrument(skip(self, state), fields(cell = %cell, mover = %state.active_player()))]
    pub fn apply(&self, state: &GameState, cell: Cell) -> GameState {
        if let Err(error) = MoveContract::pre(&self.geometry, state, cell) {
            debug!(%error, "Ignoring move");
            return state.clone();
        }

        let mover = state.active_player();
        let mut board = state.board().clone();
        board.place(cell, mover);

        let remaining_moves = state
            .remaining_moves()
            .iter()
            .copied()
            .filter(|&remaining| remaining != cell)
            .collect();

        let cached_outcome = if state.cached_outcome() != 0 {
            debug!(outcome = state.cached_outcome(), "Advancing a decided game");
            state.cached_outcome()
        } else {
            rules::compute_outcome(&board, cell, mover)
        };

        let next = GameState {
            active_player: mover.opponent(),
            board,
            remaining_moves,
            cached_outcome,
        };

        debug_assert_eq!(
            MoveContract::post(&self.geometry, state, &next),
            Ok(()),
            "Transition broke an invariant"
        );

        if self.terminal_test(&next) {
            debug!(status = ?next.status(), "Game over");
        }

        next
    }

    /// Whether the game has ended: a line was completed or no moves remain.
    pub fn terminal_test(&self, state: &GameState) -> bool {
        state.cached_outcome() != 0 || rules::is_full(state)
    }

    /// Value of `state` to `player`: +1 win, -1 loss, 0 draw or undecided.
    pub fn utility(&self, state: &GameState, player: Marker) -> i8 {
        state.cached_outcome().signum() * player.sign()
    }

    /// Applies `moves` in order from the initial state.
    ///
    /// Illegal entries are skipped under the same policy as [`GameEngine::apply`].
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(&self, moves: &[Cell]) -> GameState {
        moves
            .iter()
            .fold(self.initial_state(), |state, &cell| self.apply(&state, cell))
    }
}
