//! Console tic-tac-toe between human, random and minimax players.
//!
//! # Architecture
//!
//! - **Players**: one [`Player`] trait with human, random and minimax variants
//! - **Orchestrator**: the turn loop, reporting [`GameEvent`]s to listeners
//! - **Render**: prints events to the terminal
//! - **Session**: runs a configured number of games and tallies results

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod render;
mod session;
mod tally;

pub use config::{ConfigError, GameConfig, PlayerKind};
pub use orchestrator::{GameEvent, Orchestrator, Outcome};
pub use players::{HumanPlayer, MinimaxPlayer, Player, RandomPlayer, build as build_player};
pub use render::ConsoleRenderer;
pub use session::{play_game, run_session};
pub use tally::Tally;
