//! Tic-tac-toe board model and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid, move application with local win detection,
//!   and scoped placements that undo themselves.
//! - **Search**: a stateless minimax engine that borrows the board
//!   exclusively, explores every continuation, and hands it back unchanged.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Mark, MinimaxEngine};
//!
//! let mut board = Board::new();
//! assert!(board.place(0, Mark::X));
//! assert!(board.place(3, Mark::O));
//! assert!(board.place(1, Mark::X));
//! assert!(board.place(4, Mark::O));
//!
//! let engine = MinimaxEngine::default();
//! assert_eq!(engine.choose_move(&mut board, Mark::X).unwrap(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::{Board, Probe};
pub use error::SearchError;
pub use position::Position;
pub use search::{MinimaxEngine, SearchConfig, SearchResult, minimax};
pub use types::{CELLS, Mark, Move, SIDE, Square};
