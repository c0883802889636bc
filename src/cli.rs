//! Command-line interface for tictactoe_duel.

use crate::games::tictactoe::{Mode, Player};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players, or one player against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode; overrides the config file
        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Ask the computer which square it would take
    Suggest {
        /// Nine cells of X, O or '.', row by row (e.g. "XX..O....")
        #[arg(long)]
        board: String,

        /// Mark the computer plays
        #[arg(long, default_value = "O")]
        mark: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run, `play` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play { mode: None })
    }
}

impl Command {
    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// `play` logs to a file, so it can afford `info`. `suggest` writes
    /// to stderr next to its answer and stays quiet below warnings.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Command::Play { .. } => "info",
            Command::Suggest { .. } => "warn",
        }
    }
}
