//! Tictactoe - console game binary

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use tictactoe::{GameConfig, run_session};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Batch(args) => run_batch(args).await,
    }
}

/// Play games with the board drawn unless `--quiet` was given.
#[instrument(skip_all)]
async fn run_play(args: GameArgs) -> Result<()> {
    let config = load_config(&args)?;
    info!(?config, "Starting play");

    let tally = run_session(&config).await?;
    if tally.games() > 1 {
        println!("{}", tally);
    }
    Ok(())
}

/// Play silent games and report the results.
#[instrument(skip_all)]
async fn run_batch(args: GameArgs) -> Result<()> {
    let config = load_config(&args)?.with_render(false);
    info!(?config, "Starting batch");

    let tally = run_session(&config).await?;
    println!("{}", tally);
    Ok(())
}

fn load_config(args: &GameArgs) -> Result<GameConfig> {
    let base = if args.config.exists() {
        GameConfig::from_file(&args.config)
            .with_context(|| format!("Failed to load {}", args.config.display()))?
    } else {
        debug!(path = %args.config.display(), "No config file, using defaults");
        GameConfig::default()
    };
    Ok(args.apply(base))
}
