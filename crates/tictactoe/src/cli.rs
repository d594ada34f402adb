//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::{GameConfig, PlayerKind};

/// Tic-tac-toe in the terminal against people or an unbeatable search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games in the terminal, drawing the board after every move
    Play(GameArgs),

    /// Run silent games and print the tally
    Batch(GameArgs),
}

/// Settings shared by every command. Flags override the config file.
#[derive(Args, Debug)]
pub struct GameArgs {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Who plays X
    #[arg(long = "x", value_enum)]
    pub x_player: Option<PlayerKind>,

    /// Who plays O
    #[arg(long = "o", value_enum)]
    pub o_player: Option<PlayerKind>,

    /// Number of games to play
    #[arg(short, long)]
    pub games: Option<u32>,

    /// Pause after each move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Always search the opening move instead of picking it at random
    #[arg(long)]
    pub no_opening_shortcut: bool,

    /// Do not draw the board
    #[arg(short, long)]
    pub quiet: bool,
}

impl GameArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(kind) = self.x_player {
            config = config.with_x_player(kind);
        }
        if let Some(kind) = self.o_player {
            config = config.with_o_player(kind);
        }
        if let Some(games) = self.games {
            config = config.with_games(games);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_move_delay_ms(delay);
        }
        if self.no_opening_shortcut {
            config = config.with_opening_shortcut(false);
        }
        if self.quiet {
            config = config.with_render(false);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "tictactoe",
            "play",
            "--x",
            "random",
            "--games",
            "3",
            "--no-opening-shortcut",
        ]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };

        let config = args.apply(GameConfig::default());
        assert_eq!(*config.x_player(), PlayerKind::Random);
        assert_eq!(*config.o_player(), PlayerKind::Minimax);
        assert_eq!(*config.games(), 3);
        assert!(!*config.opening_shortcut());
        assert!(*config.render());
    }

    #[test]
    fn test_batch_quiet() {
        let cli = Cli::parse_from(["tictactoe", "batch", "--quiet", "--o", "random"]);
        let Command::Batch(args) = cli.command else {
            panic!("expected batch");
        };

        let config = args.apply(GameConfig::default());
        assert!(!*config.render());
        assert_eq!(*config.o_player(), PlayerKind::Random);
    }
}
