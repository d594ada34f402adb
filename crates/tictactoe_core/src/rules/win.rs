//! Win detection logic for tic-tac-toe.

use crate::types::{CELLS, Mark, Move, SIDE, Square};

/// All eight winning lines: rows, columns, diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark`, just played at `index`, completes a line.
///
/// Only the lines through `index` are examined: its row, its column, and
/// both diagonals when the index is even (corners and center).
pub fn completes_line(squares: &[Square; CELLS], index: Move, mark: Mark) -> bool {
    let owned = |i: Move| squares[i] == Square::Occupied(mark);

    let row = index / SIDE * SIDE;
    if (row..row + SIDE).all(owned) {
        return true;
    }

    let col = index % SIDE;
    if (0..SIDE).map(|r| col + r * SIDE).all(owned) {
        return true;
    }

    if index % 2 == 0 {
        if [2, 4, 6].into_iter().all(owned) {
            return true;
        }
        if [0, 4, 8].into_iter().all(owned) {
            return true;
        }
    }

    false
}

/// Scans all eight lines and returns the mark holding one, if any.
///
/// Equivalent to running [`completes_line`] after every move; kept as the
/// reference the local check is tested against.
pub fn scan(squares: &[Square; CELLS]) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(mark)
        }
        _ => None,
    })
}
