//! Runs a configured series of games.

use crate::config::GameConfig;
use crate::orchestrator::{Orchestrator, Outcome};
use crate::players::{self, Player};
use crate::render::ConsoleRenderer;
use crate::tally::Tally;
use anyhow::{Context, Result};
use std::time::Duration;
use tictactoe_core::{Board, Mark};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Plays `config.games()` games with fresh players each time.
#[instrument(skip_all, fields(x = %config.x_player(), o = %config.o_player(), games = config.games()))]
pub async fn run_session(config: &GameConfig) -> Result<Tally> {
    let mut tally = Tally::default();

    for game in 1..=*config.games() {
        let player_x = players::build(*config.x_player(), Mark::X, config);
        let player_o = players::build(*config.o_player(), Mark::O, config);

        let outcome = play_game(config, player_x, player_o).await?;
        info!(game, %outcome, "Game finished");
        tally.record(outcome);
    }

    Ok(tally)
}

/// Plays a single game, printing it to stdout when rendering is on.
pub async fn play_game(
    config: &GameConfig,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
) -> Result<Outcome> {
    let mut board = Board::new();
    let orchestrator = Orchestrator::new(player_x, player_o);

    if !*config.render() {
        let mut orchestrator = orchestrator;
        return orchestrator.play(&mut board).await;
    }

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(ConsoleRenderer::new(std::io::stdout()).run(event_rx));

    let mut orchestrator = orchestrator
        .with_events(event_tx)
        .with_move_delay(Duration::from_millis(*config.move_delay_ms()));
    let outcome = orchestrator.play(&mut board).await;

    // Closing the channel lets the renderer finish.
    drop(orchestrator);
    renderer
        .await
        .context("Renderer task failed")?
        .context("Failed to write to stdout")?;

    outcome
}
