//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults to strictly_games.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively (click a cell, or use 1-9 / arrows + Enter)
    Play,

    /// Apply moves headlessly and print the render instructions as JSON lines
    Script {
        /// Cell indices (0-8) in play order, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Append the replay (reset) instructions after the moves
        #[arg(long)]
        reset: bool,
    },

    /// Render a JSON-lines instruction stream as a text board
    Show {
        /// Instruction file. Reads stdin if not provided.
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_moves() {
        let cli = Cli::parse_from(["strictly_games", "script", "--moves", "0,3,1,4,2", "--reset"]);
        match cli.command {
            Command::Script { moves, reset } => {
                assert_eq!(moves, vec![0, 3, 1, 4, 2]);
                assert!(reset);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["strictly_games", "play", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::Play));
    }

    #[test]
    fn test_script_requires_moves() {
        assert!(Cli::try_parse_from(["strictly_games", "script"]).is_err());
    }
}
