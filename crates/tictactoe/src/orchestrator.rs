//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use std::time::Duration;
use tictactoe_core::{Board, Mark, Move};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Consecutive rejected moves tolerated from one player before giving up.
const MAX_REJECTIONS: usize = 16;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    /// A mark completed a line.
    #[display("{_0}")]
    Winner(Mark),
    /// The board filled up without a line.
    #[display("Tie")]
    Tie,
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new game is about to start.
    Started,
    /// A move was accepted.
    MoveMade {
        /// Mark that moved.
        mark: Mark,
        /// Cell it moved to.
        position: Move,
        /// Board after the move.
        board: Board,
    },
    /// A player proposed a cell that was out of range or occupied.
    MoveRejected {
        /// Mark that tried to move.
        mark: Mark,
        /// Cell it asked for.
        position: Move,
    },
    /// Game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    move_delay: Duration,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Orchestrator {
    /// Creates a new orchestrator. X always moves first.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            player_x,
            player_o,
            move_delay: Duration::ZERO,
            event_tx: None,
        }
    }

    /// Sends game events to `event_tx`.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Pauses for `delay` after each move that does not end the game.
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    /// Runs the game loop on `board` until a win or a full board.
    ///
    /// # Errors
    ///
    /// Fails if a player errors, a player's mark does not match its seat,
    /// or one player keeps proposing illegal moves.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn play(&mut self, board: &mut Board) -> Result<Outcome> {
        anyhow::ensure!(
            self.player_x.mark() == Mark::X && self.player_o.mark() == Mark::O,
            "Players must hold X and O respectively"
        );

        info!("Starting game orchestration");
        self.emit(GameEvent::Started).await;

        let mut mark = Mark::X;
        let mut rejections = 0;

        while board.has_empty_cell() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.get_move(board).await?;

            if !board.place(position, mark) {
                warn!(%mark, position, "Move rejected");
                rejections += 1;
                anyhow::ensure!(
                    rejections < MAX_REJECTIONS,
                    "{} proposed {} illegal moves in a row",
                    player.name(),
                    rejections
                );
                self.emit(GameEvent::MoveRejected { mark, position }).await;
                continue;
            }
            rejections = 0;

            debug!(%mark, position, "Move placed");
            self.emit(GameEvent::MoveMade {
                mark,
                position,
                board: board.clone(),
            })
            .await;

            if let Some(winner) = board.winning_mark() {
                return self.finish(Outcome::Winner(winner)).await;
            }

            mark = mark.opponent();

            if !self.move_delay.is_zero() && board.has_empty_cell() {
                tokio::time::sleep(self.move_delay).await;
            }
        }

        self.finish(Outcome::Tie).await
    }

    async fn finish(&self, outcome: Outcome) -> Result<Outcome> {
        info!(%outcome, "Game over");
        self.emit(GameEvent::GameOver { outcome }).await;
        Ok(outcome)
    }

    async fn emit(&self, event: GameEvent) {
        let Some(tx) = &self.event_tx else {
            return;
        };
        if tx.send(event).is_err() {
            debug!("Event listener dropped");
            return;
        }
        // Let the listener draw before the next player is prompted.
        tokio::task::yield_now().await;
    }
}
