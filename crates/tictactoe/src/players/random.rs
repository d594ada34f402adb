//! Player that picks a uniformly random legal move.

use super::Player;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tictactoe_core::{Board, Mark, Move};
use tracing::debug;

/// Random player.
pub struct RandomPlayer<R = StdRng> {
    name: String,
    mark: Mark,
    rng: R,
}

impl RandomPlayer {
    /// Creates a random player seeded from the operating system.
    pub fn new(mark: Mark) -> Self {
        Self::with_rng(mark, StdRng::from_os_rng())
    }
}

impl<R: rand::Rng + Send> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn with_rng(mark: Mark, rng: R) -> Self {
        Self {
            name: format!("Random ({})", mark),
            mark,
            rng,
        }
    }
}

#[async_trait::async_trait]
impl<R: rand::Rng + Send> Player for RandomPlayer<R> {
    async fn get_move(&mut self, board: &Board) -> Result<Move> {
        let moves = board.available_moves();
        let Some(&position) = moves.choose(&mut self.rng) else {
            anyhow::bail!("No valid moves available");
        };
        debug!(player = %self.name, position, "Random player chose position");
        Ok(position)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
