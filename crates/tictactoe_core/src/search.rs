//! Exhaustive minimax search.
//!
//! The search explores every continuation on a single board, placing and
//! undoing marks in depth-first order. Terminal scores are weighted by the
//! number of empty cells left, so a win found sooner (or a loss delayed
//! longer) ranks further from zero. Ties keep the first move tried, which
//! is always the lowest index.

use crate::board::Board;
use crate::error::SearchError;
use crate::types::{CELLS, Mark, Move};
use derive_new::new;
use derive_setters::Setters;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Best move found at some depth and its score from the maximizer's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SearchResult {
    /// The move leading to `score`; `None` on terminal boards.
    pub position: Option<Move>,
    /// Positive favours the maximizing mark, negative its opponent.
    pub score: i32,
}

/// Scores `board` with `player` to move, maximizing for `max_player`.
///
/// The board is handed back exactly as it was received.
pub fn minimax(board: &mut Board, player: Mark, max_player: Mark) -> SearchResult {
    let other = player.opponent();

    // The previous mover completed a line.
    if board.winning_mark() == Some(other) {
        let magnitude = board.empty_cell_count() as i32 + 1;
        let score = if other == max_player {
            magnitude
        } else {
            -magnitude
        };
        return SearchResult::new(None, score);
    }

    if !board.has_empty_cell() {
        return SearchResult::new(None, 0);
    }

    let maximizing = player == max_player;
    let mut best = SearchResult::new(None, if maximizing { i32::MIN } else { i32::MAX });

    for index in board.available_moves() {
        let Some(mut probe) = board.probe(index, player) else {
            continue;
        };
        let mut candidate = minimax(&mut probe, other, max_player);
        drop(probe);

        candidate.position = Some(index);

        let improves = if maximizing {
            candidate.score > best.score
        } else {
            candidate.score < best.score
        };
        if improves {
            best = candidate;
        }
    }

    best
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
pub struct SearchConfig {
    /// Pick a random cell instead of searching when the board is empty.
    pub opening_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            opening_shortcut: true,
        }
    }
}

/// Chooses moves for an automated player.
///
/// Holds no state between calls; every call borrows the board exclusively
/// for the whole search and returns it untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    /// Creates an engine with the given settings.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the engine settings.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks the best move for `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if a line is already complete and
    /// [`SearchError::NoLegalMoves`] if the board is full.
    pub fn choose_move(&self, board: &mut Board, mark: Mark) -> Result<Move, SearchError> {
        self.choose_move_with_rng(board, mark, &mut rand::rng())
    }

    /// Like [`choose_move`](Self::choose_move) with a caller-supplied RNG for
    /// the opening shortcut.
    #[instrument(skip(self, board, rng), fields(mark = %mark, empty = board.empty_cell_count()))]
    pub fn choose_move_with_rng<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        mark: Mark,
        rng: &mut R,
    ) -> Result<Move, SearchError> {
        if let Some(winner) = board.winning_mark() {
            return Err(SearchError::GameOver(winner));
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        if self.config.opening_shortcut && moves.len() == CELLS {
            let index = *moves.choose(rng).ok_or(SearchError::NoLegalMoves)?;
            debug!(index, "Opening move picked at random");
            return Ok(index);
        }

        let result = minimax(board, mark, mark);
        debug!(position = ?result.position, score = result.score, "Search complete");
        result.position.ok_or(SearchError::NoLegalMoves)
    }
}
