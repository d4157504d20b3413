//! Board geometry for pyramid tic-tac-toe.
//!
//! The board is a stack of rows of varying width, numbered from the apex
//! (row 1) downward. Columns are numbered from 1 within each row, so the
//! coordinate system is skewed: moving straight down a column or along a
//! diagonal walks across rows of different sizes.

use crate::error::GeometryError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Row sizes of the standard five-row pyramid.
pub const DEFAULT_PROFILE: [usize; 5] = [1, 2, 3, 2, 1];

/// A cell coordinate: row from the apex, column within the row (both 1-based).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({}, {})", row, col)]
pub struct Cell {
    /// Row, counted from the apex starting at 1.
    pub row: usize,
    /// Column within the row, starting at 1.
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate. Validity is decided by a [`BoardGeometry`].
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps `steps` times along `direction` (negative steps walk backwards).
    ///
    /// Returns `None` if the walk leaves the non-negative quadrant. A result
    /// may still lie outside the board; callers check membership separately.
    pub fn offset(self, direction: Direction, steps: isize) -> Option<Cell> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(steps)?)?;
        Some(Cell { row, col })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// An axis along which three markers can line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Direction {
    /// Along a row: (0, +1).
    Horizontal,
    /// Down a column: (+1, 0).
    Vertical,
    /// Down and to the left: (+1, -1).
    DiagonalLeft,
    /// Down and to the right: (+1, +1).
    DiagonalRight,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalLeft,
        Direction::DiagonalRight,
    ];

    /// Returns the step vector as (Δrow, Δcol).
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalLeft => (1, -1),
            Direction::DiagonalRight => (1, 1),
        }
    }
}

/// The fixed shape of a board and its canonical cell order.
///
/// Built once from a row-size profile and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGeometry {
    profile: Vec<usize>,
    cells: Vec<Cell>,
}

impl BoardGeometry {
    /// Builds a geometry from row sizes listed from the apex downward.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyProfile`] for an empty profile and
    /// [`GeometryError::ZeroSizedRow`] if any row has no cells.
    #[instrument]
    pub fn new(profile: &[usize]) -> Result<Self, GeometryError> {
        if profile.is_empty() {
            return Err(GeometryError::EmptyProfile);
        }
        if let Some(index) = profile.iter().position(|&size| size == 0) {
            return Err(GeometryError::ZeroSizedRow { row: index + 1 });
        }

        let geometry = Self::from_valid_profile(profile);
        debug!(
            rows = geometry.row_count(),
            cells = geometry.cell_count(),
            "Geometry built"
        );
        Ok(geometry)
    }

    /// The standard five-row pyramid (row sizes 1, 2, 3, 2, 1).
    pub fn pyramid() -> Self {
        Self::from_valid_profile(&DEFAULT_PROFILE)
    }

    fn from_valid_profile(profile: &[usize]) -> Self {
        let cells = profile
            .iter()
            .enumerate()
            .flat_map(|(index, &size)| (1..=size).map(move |col| Cell::new(index + 1, col)))
            .collect();
        Self {
            profile: profile.to_vec(),
            cells,
        }
    }

    /// Every valid cell, smallest row first and ascending column within a row.
    ///
    /// This is the canonical move order.
    pub fn canonical_coordinates(&self) -> &[Cell] {
        &self.cells
    }

    /// The four step vectors used for line detection.
    ///
    /// They do not depend on the profile.
    pub fn valid_step_directions(&self) -> [Direction; 4] {
        Direction::ALL
    }

    /// Row sizes, apex first.
    pub fn profile(&self) -> &[usize] {
        &self.profile
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.profile.len()
    }

    /// Number of cells in `row` (1-based), or `None` past the last row.
    pub fn row_size(&self, row: usize) -> Option<usize> {
        row.checked_sub(1)
            .and_then(|index| self.profile.get(index))
            .copied()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `cell` lies on this board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 1 && self.row_size(cell.row).is_some_and(|size| cell.col <= size)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::pyramid()
    }
}
