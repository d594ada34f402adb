//! Named board positions for human-facing input and output.

use crate::board::Board;
use crate::types::{CELLS, Move};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell named by where it sits on the grid.
///
/// Discriminants are the row-major cell indices, so `Center as Move == 4`.
/// Labels such as `top-left` parse case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Position {
    /// Cell 0
    TopLeft = 0,
    /// Cell 1
    TopCenter = 1,
    /// Cell 2
    TopRight = 2,
    /// Cell 3
    MiddleLeft = 3,
    /// Cell 4
    Center = 4,
    /// Cell 5
    MiddleRight = 5,
    /// Cell 6
    BottomLeft = 6,
    /// Cell 7
    BottomCenter = 7,
    /// Cell 8
    BottomRight = 8,
}

impl Position {
    /// Kebab-case label, e.g. `bottom-center`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Parses a cell index (`"4"`) or a label (`"center"`, `"Top-Left"`).
    ///
    /// Surrounding whitespace is ignored. Out-of-range numbers and unknown
    /// labels give `None`.
    #[instrument]
    pub fn from_label_or_number(input: &str) -> Option<Position> {
        let input = input.trim();
        match input.parse::<Move>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Position::from_str(input).ok(),
        }
    }

    /// The board index of this cell.
    pub fn to_index(self) -> Move {
        self as Move
    }

    /// The position for a board index, `None` past the last cell.
    pub fn from_index(index: Move) -> Option<Self> {
        if index < CELLS {
            Position::iter().nth(index)
        } else {
            None
        }
    }

    /// Positions whose cells are still empty, in index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter()
            .filter(|pos| board.is_empty(pos.to_index()))
            .collect()
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_indices_follow_declaration_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(CELLS), None);
    }

    #[test]
    fn test_parse_number_and_label() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" 0 \n"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(
            Position::from_label_or_number("BOTTOM-RIGHT"),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::from_label_or_number("12"), None);
        assert_eq!(Position::from_label_or_number("middle"), None);
        assert_eq!(Position::from_label_or_number(""), None);
    }

    #[test]
    fn test_label_and_display_agree() {
        assert_eq!(Position::TopCenter.label(), "top-center");
        assert_eq!(Position::MiddleRight.to_string(), "middle-right");
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let mut board = Board::new();
        assert!(board.place(0, Mark::X));
        assert!(board.place(4, Mark::O));

        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }
}
