//! tictactoe_duel - terminal tic-tac-toe with a heuristic computer opponent.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tictactoe_duel::cli::{Cli, Command};
use tictactoe_duel::{AppConfig, Board, Mode, Player, Verdict, evaluate, select_move, to_notation};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let command = cli.resolved_command();
    init_tracing(&command, &config)?;

    match command {
        Command::Play { mode } => run_play(&config, mode).await,
        Command::Suggest { board, mark, json } => run_suggest(&board, mark, json),
    }
}

/// Installs the global subscriber for `command`.
///
/// The TUI owns the terminal, so `play` logs to the configured file.
fn init_tracing(command: &Command, config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(command.default_log_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match command {
        Command::Play { .. } => {
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            let _ = builder
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        Command::Suggest { .. } => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

/// Runs the terminal UI.
async fn run_play(config: &AppConfig, mode: Option<Mode>) -> Result<()> {
    let mode = mode.unwrap_or(*config.default_mode());
    info!(%mode, ai_delay_ms = config.ai_delay_ms(), "Configuration resolved");
    tictactoe_duel::tui::run_tui(config, mode).await
}

/// Prints the computer's pick for a board given in notation.
#[instrument]
fn run_suggest(board: &str, mark: Player, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    debug!(board = %to_notation(&board), "Board parsed");

    match evaluate(&board) {
        Verdict::Ongoing => {}
        Verdict::Line(_) | Verdict::Draw => bail!("Game is already over on this board"),
    }

    let Some(choice) = select_move(&board, mark) else {
        bail!("No empty square left");
    };

    if json {
        let out = serde_json::json!({
            "board": to_notation(&board),
            "mark": mark,
            "position": choice.position,
            "index": choice.position.to_index(),
            "heuristic": choice.heuristic,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{mark} plays {} (key {}, index {}) by rule: {}",
            choice.position,
            choice.position.to_index() + 1,
            choice.position.to_index(),
            choice.heuristic
        );
    }
    Ok(())
}
