//! Human player that types moves at the terminal.

use super::Player;
use anyhow::{Context, Result};
use tictactoe_core::{Board, Mark, Move, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::debug;

/// Human player reading one move per line.
///
/// Accepts a cell number or a position label and keeps asking until the
/// answer names an empty cell.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdin(mark: Mark) -> Self {
        Self::new(mark, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a human player on the given streams.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            name: format!("Human ({})", mark),
            mark,
            input,
            output,
        }
    }

    /// Consumes the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<R, W> Player for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn get_move(&mut self, board: &Board) -> Result<Move> {
        let available = board.available_moves();

        loop {
            let prompt = format!("{}'s turn. Input move (0-8): ", self.mark);
            self.say(&prompt).await?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .await
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} chose a move", self.mark);
            }

            match Position::from_label_or_number(&line) {
                Some(pos) if available.contains(&pos.to_index()) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(pos.to_index());
                }
                _ => {
                    debug!(input = line.trim(), "Rejected human input");
                    self.say("Invalid square! Please try again.\n").await?;
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
