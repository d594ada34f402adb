//! Player trait and implementations.

mod human;
mod minimax;
mod random;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use crate::config::{GameConfig, PlayerKind};
use anyhow::Result;
use tictactoe_core::{Board, Mark, MinimaxEngine, Move, SearchConfig};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the cell index (0-8) to mark next. The orchestrator still
    /// validates it; a rejected move makes it ask again.
    async fn get_move(&mut self, board: &Board) -> Result<Move>;

    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Builds the player of the given kind for `mark`.
pub fn build(kind: PlayerKind, mark: Mark, config: &GameConfig) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdin(mark)),
        PlayerKind::Random => Box::new(RandomPlayer::new(mark)),
        PlayerKind::Minimax => {
            let search = SearchConfig::default().opening_shortcut(*config.opening_shortcut());
            Box::new(MinimaxPlayer::new(mark, MinimaxEngine::new(search)))
        }
    }
}
