//! Core domain types for pyramid tic-tac-toe.

use crate::error::SnapshotError;
use crate::geometry::Cell;
use crate::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Marker {
    /// Moves first (the maximizing side).
    X,
    /// Moves second.
    O,
}

impl Marker {
    /// The marker that opens every game.
    pub const FIRST: Marker = Marker::X;

    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// +1 for the first marker, -1 for the second.
    pub fn sign(self) -> i8 {
        if self == Marker::FIRST { 1 } else { -1 }
    }
}

/// One occupied cell, as it appears in a serialized [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Where the marker sits.
    pub cell: Cell,
    /// Whose marker it is.
    pub marker: Marker,
}

/// Sparse board: only occupied cells are stored.
///
/// Serializes as a list of [`Placement`]s, ordered by cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Placement>", from = "Vec<Placement>")]
pub struct Board {
    cells: HashMap<Cell, Marker>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker at `cell`, or `None` if the cell is empty or off the board.
    pub fn get(&self, cell: Cell) -> Option<Marker> {
        self.cells.get(&cell).copied()
    }

    /// Whether `cell` holds a marker.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.values().filter(|&&m| m == marker).count()
    }

    /// Occupied cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Marker)> + '_ {
        self.cells.iter().map(|(&cell, &marker)| (cell, marker))
    }

    /// Cells holding `marker`, in arbitrary order.
    pub fn cells_of(&self, marker: Marker) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(move |&(_, m)| m == marker)
            .map(|(cell, _)| cell)
    }

    /// Places `marker` at `cell`, returning whatever was there before.
    pub(crate) fn place(&mut self, cell: Cell, marker: Marker) -> Option<Marker> {
        self.cells.insert(cell, marker)
    }
}

impl From<Board> for Vec<Placement> {
    fn from(board: Board) -> Self {
        let mut placements: Vec<Placement> = board
            .cells
            .into_iter()
            .map(|(cell, marker)| Placement { cell, marker })
            .collect();
        placements.sort_by_key(|placement| placement.cell);
        placements
    }
}

impl From<Vec<Placement>> for Board {
    fn from(placements: Vec<Placement>) -> Self {
        Self {
            cells: placements
                .into_iter()
                .map(|placement| (placement.cell, placement.marker))
                .collect(),
        }
    }
}

/// Typed view of where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has a line.
    InProgress,
    /// A marker completed a line.
    Won(Marker),
    /// The board filled up without a line.
    Draw,
}

/// Immutable game state. Every transition produces a fresh value.
///
/// Deserialization rejects outcomes other than -1, 0 and +1. Board-level
/// consistency is checked by the engine before each move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateSnapshot")]
pub struct GameState {
    pub(crate) active_player: Marker,
    pub(crate) board: Board,
    pub(crate) remaining_moves: Vec<Cell>,
    pub(crate) cached_outcome: i8,
}

impl GameState {
    /// Creates the opening state: empty board, every cell available.
    pub(crate) fn opening(cells: &[Cell]) -> Self {
        Self {
            active_player: Marker::FIRST,
            board: Board::new(),
            remaining_moves: cells.to_vec(),
            cached_outcome: 0,
        }
    }

    /// The marker that moves next.
    pub fn active_player(&self) -> Marker {
        self.active_player
    }

    /// Occupied cells.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unoccupied cells in canonical order.
    pub fn remaining_moves(&self) -> &[Cell] {
        &self.remaining_moves
    }

    /// +1 if the first marker has completed a line, -1 for the second, 0 otherwise.
    pub fn cached_outcome(&self) -> i8 {
        self.cached_outcome
    }

    /// Occupied plus unoccupied cells; always the geometry's cell count.
    pub fn cell_count(&self) -> usize {
        self.board.len() + self.remaining_moves.len()
    }

    /// Summarizes the outcome and remaining moves.
    pub fn status(&self) -> GameStatus {
        if rules::is_draw(self) {
            return GameStatus::Draw;
        }
        match self.cached_outcome {
            0 => GameStatus::InProgress,
            outcome if outcome > 0 => GameStatus::Won(Marker::FIRST),
            _ => GameStatus::Won(Marker::FIRST.opponent()),
        }
    }
}

/// Wire form of [`GameState`], validated on the way in.
#[derive(Deserialize)]
struct GameStateSnapshot {
    active_player: Marker,
    board: Board,
    remaining_moves: Vec<Cell>,
    cached_outcome: i8,
}

impl TryFrom<GameStateSnapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snapshot: GameStateSnapshot) -> Result<Self, Self::Error> {
        if !(-1..=1).contains(&snapshot.cached_outcome) {
            return Err(SnapshotError::OutcomeOutOfRange {
                outcome: snapshot.cached_outcome,
            });
        }
        Ok(Self {
            active_player: snapshot.active_player,
            board: snapshot.board,
            remaining_moves: snapshot.remaining_moves,
            cached_outcome: snapshot.cached_outcome,
        })
    }
}
