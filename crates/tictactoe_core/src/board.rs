//! The 3x3 board: cell storage, move application and win tracking.

use crate::rules;
use crate::types::{CELLS, Mark, Move, SIDE, Square};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major: index `i` is row `i / 3`, column `i % 3`.
/// `winning_mark` is set by the move that completes a line and is only
/// cleared by [`Board::undo`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [Square; CELLS],
    winning_mark: Option<Mark>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index, `None` when out of range.
    pub fn get(&self, index: Move) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: Move) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// The mark that completed a line, if any.
    pub fn winning_mark(&self) -> Option<Mark> {
        self.winning_mark
    }

    /// Indices of all empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<Move> {
        (0..CELLS).filter(|&i| self.squares[i] == Square::Empty).collect()
    }

    /// Whether at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        !rules::is_full(&self.squares)
    }

    /// Number of empty cells.
    pub fn empty_cell_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// No winner and no empty cell.
    pub fn is_tied(&self) -> bool {
        rules::is_tie(&self.squares, self.winning_mark)
    }

    /// Either somebody won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winning_mark.is_some() || !self.has_empty_cell()
    }

    /// Places `mark` at `index`.
    ///
    /// Returns `false` without touching the board when the index is out of
    /// range or the cell is occupied. On success the lines through `index`
    /// are checked and `winning_mark` is set if one of them is complete.
    pub fn place(&mut self, index: Move, mark: Mark) -> bool {
        if !self.is_empty(index) {
            return false;
        }

        self.squares[index] = Square::Occupied(mark);
        if rules::completes_line(&self.squares, index, mark) {
            self.winning_mark = Some(mark);
        }
        true
    }

    /// Empties `index` and clears the winner.
    ///
    /// Only meant for backtracking: undoing the exploratory placements in
    /// reverse order restores the board exactly.
    pub fn undo(&mut self, index: Move) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
        }
        self.winning_mark = None;
    }

    /// Places `mark` at `index` for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board and undoes the placement when
    /// dropped, whichever way the caller's scope is left. Returns `None` if
    /// the placement is rejected.
    pub fn probe(&mut self, index: Move, mark: Mark) -> Option<Probe<'_>> {
        if self.place(index, mark) {
            Some(Probe { board: self, index })
        } else {
            None
        }
    }

    /// The `| 0 | 1 | 2 |` guide showing which number picks which cell.
    pub fn reference_grid() -> String {
        (0..SIDE)
            .map(|row| {
                let cells: Vec<String> = (row * SIDE..(row + 1) * SIDE)
                    .map(|i| i.to_string())
                    .collect();
                format!("| {} |", cells.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = cells.iter().map(|s| s.symbol().to_string()).collect();
            write!(f, "| {} |", symbols.join(" | "))?;
        }
        Ok(())
    }
}

/// A placement that is undone when the guard goes out of scope.
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    index: Move,
}

impl Probe<'_> {
    /// The cell this probe occupies.
    pub fn index(&self) -> Move {
        self.index
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.undo(self.index);
    }
}
