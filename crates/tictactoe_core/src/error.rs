//! Search error types.

use crate::types::Mark;

/// Precondition failures when asking the engine for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// Every cell is occupied.
    #[display("No legal moves: the board is full")]
    NoLegalMoves,

    /// A line is already complete.
    #[display("Game is already over: {_0} has won")]
    GameOver(#[error(not(source))] Mark),
}
