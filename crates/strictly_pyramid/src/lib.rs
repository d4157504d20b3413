//! Strictly Pyramid - pyramid tic-tac-toe as a pure game model
//!
//! Two players place X and O markers on a triangular board of rows with
//! varying width (1, 2, 3, 2, 1 cells by default). Three markers in a row,
//! column or diagonal win. The crate is the rules only: a search player drives
//! it through [`AdversarialGame`], and a renderer reads [`GameState::board`].
//!
//! # Architecture
//!
//! - **Geometry**: board shape, canonical cell order, step directions
//! - **Engine**: immutable state transitions and evaluation
//! - **Rules**: local win detection around the last move
//! - **Contracts / Invariants**: move preconditions and state postconditions
//!
//! # Example
//!
//! ```
//! use strictly_pyramid::{Cell, GameEngine, Marker};
//!
//! let engine = GameEngine::default();
//! let moves = [(3, 1), (3, 2), (2, 1), (3, 3), (1, 1)].map(Cell::from);
//! let state = engine.replay(&moves);
//!
//! assert!(engine.terminal_test(&state));
//! assert_eq!(engine.utility(&state, Marker::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod contracts;
mod engine;
mod error;
mod geometry;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Geometry
pub use geometry::{BoardGeometry, Cell, DEFAULT_PROFILE, Direction};

// Crate-level exports - State
pub use types::{Board, GameState, GameStatus, Marker, Placement};

// Crate-level exports - Engine and search seam
pub use engine::GameEngine;
pub use search::AdversarialGame;

// Crate-level exports - Rules
pub use rules::{
    WIN_LENGTH, completes_line, compute_outcome, has_line, is_draw, is_full, run_length,
};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    CellAvailable, CellOnBoard, CellUnoccupied, Contract, LegalMove, MoveContract,
    StateConsistent,
};
pub use invariants::{
    AlternatingTurnInvariant, CellPartitionInvariant, Invariant, InvariantSet,
    InvariantViolation, OutcomeConsistentInvariant, PyramidInvariants,
};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, PyramidConfig};
pub use error::{GeometryError, MoveError, SnapshotError};
