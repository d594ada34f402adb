//! Player backed by the minimax engine.

use super::Player;
use anyhow::{Context, Result};
use tictactoe_core::{Board, Mark, MinimaxEngine, Move};
use tracing::{debug, instrument};

/// Automated player that never loses.
pub struct MinimaxPlayer {
    name: String,
    mark: Mark,
    engine: MinimaxEngine,
}

impl MinimaxPlayer {
    /// Creates a minimax player using `engine`.
    pub fn new(mark: Mark, engine: MinimaxEngine) -> Self {
        Self {
            name: format!("Minimax ({})", mark),
            mark,
            engine,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    /// Searches a private copy of the board on the blocking pool.
    #[instrument(skip(self, board), fields(player = %self.name))]
    async fn get_move(&mut self, board: &Board) -> Result<Move> {
        let mut scratch = board.clone();
        let engine = self.engine;
        let mark = self.mark;

        let position = tokio::task::spawn_blocking(move || engine.choose_move(&mut scratch, mark))
            .await
            .context("Search task failed")??;

        debug!(position, "Minimax chose position");
        Ok(position)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::SearchConfig;

    #[tokio::test]
    async fn test_blocks_and_leaves_board_alone() {
        let mut board = Board::new();
        for (i, mark) in [(0, Mark::O), (4, Mark::X), (1, Mark::O)] {
            assert!(board.place(i, mark));
        }
        let before = board.clone();

        let mut player = MinimaxPlayer::new(Mark::X, MinimaxEngine::default());
        assert_eq!(player.get_move(&board).await.unwrap(), 2);
        assert_eq!(board, before);
    }

    #[tokio::test]
    async fn test_finished_game_is_error() {
        let mut board = Board::new();
        for (i, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
            assert!(board.place(i, mark));
        }
        let engine = MinimaxEngine::new(SearchConfig::default().opening_shortcut(false));
        let mut player = MinimaxPlayer::new(Mark::O, engine);
        let err = player.get_move(&board).await.unwrap_err();
        assert!(err.to_string().contains("already over"));
    }
}
