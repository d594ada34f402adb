//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which kind of player controls a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Exhaustive minimax search.
    Minimax,
}

/// Settings for a run of one or more games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Who plays X.
    #[serde(default = "default_x_player")]
    x_player: PlayerKind,

    /// Who plays O.
    #[serde(default = "default_o_player")]
    o_player: PlayerKind,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Pause after each move while rendering, in milliseconds.
    #[serde(default = "default_move_delay_ms")]
    move_delay_ms: u64,

    /// Let the minimax player open with a random cell on an empty board.
    #[serde(default = "default_opening_shortcut")]
    opening_shortcut: bool,

    /// Print the board after every move.
    #[serde(default = "default_render")]
    render: bool,
}

fn default_x_player() -> PlayerKind {
    PlayerKind::Human
}

fn default_o_player() -> PlayerKind {
    PlayerKind::Minimax
}

fn default_games() -> u32 {
    1
}

fn default_move_delay_ms() -> u64 {
    800
}

fn default_opening_shortcut() -> bool {
    true
}

fn default_render() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x_player: default_x_player(),
            o_player: default_o_player(),
            games: default_games(),
            move_delay_ms: default_move_delay_ms(),
            opening_shortcut: default_opening_shortcut(),
            render: default_render(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x_player, o = %config.o_player, games = config.games, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
