//! Draw detection logic for tic-tac-toe.

use crate::types::{CELLS, Mark, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(squares: &[Square; CELLS]) -> bool {
    squares.iter().all(|s| *s != Square::Empty)
}

/// A game is tied when nobody has won and no empty square remains.
pub fn is_tie(squares: &[Square; CELLS], winner: Option<Mark>) -> bool {
    winner.is_none() && is_full(squares)
}
