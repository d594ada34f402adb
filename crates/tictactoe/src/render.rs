//! Console output for game events.

use crate::orchestrator::{GameEvent, Outcome};
use std::io::{self, Write};
use tictactoe_core::Board;
use tokio::sync::mpsc;

/// Prints game events as plain text.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one event.
    pub fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::Started => {
                writeln!(self.out, "{}", Board::reference_grid())?;
                writeln!(self.out)?;
            }
            GameEvent::MoveMade {
                mark,
                position,
                board,
            } => {
                writeln!(self.out, "{} makes a move to {}", mark, position)?;
                writeln!(self.out)?;
                writeln!(self.out, "{}", board)?;
                writeln!(self.out)?;
            }
            GameEvent::MoveRejected { mark, position } => {
                writeln!(self.out, "{} cannot move to {}", mark, position)?;
            }
            GameEvent::GameOver { outcome } => match outcome {
                Outcome::Winner(mark) => writeln!(self.out, "{} wins!", mark)?,
                Outcome::Tie => writeln!(self.out, "It's a tie!")?,
            },
        }
        self.out.flush()
    }

    /// Renders events until the sender side closes.
    pub async fn run(mut self, mut event_rx: mpsc::UnboundedReceiver<GameEvent>) -> io::Result<W> {
        while let Some(event) = event_rx.recv().await {
            self.render(&event)?;
        }
        Ok(self.out)
    }
}
