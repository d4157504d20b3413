//! Game rules for pyramid tic-tac-toe.
//!
//! Pure functions over boards and states. The engine composes them into
//! transitions; the invariant layer reuses them for its checks.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LENGTH, completes_line, compute_outcome, has_line, run_length};
