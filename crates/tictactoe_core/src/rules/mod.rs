//! Game rules for tic-tac-toe.
//!
//! Pure functions over the cell array, kept apart from board storage so
//! the local win check can be tested against a full scan.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, completes_line, scan};
