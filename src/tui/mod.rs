//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, command_for, move_cursor};

use crate::config::AppConfig;
use crate::games::tictactoe::{AiTicket, Mode};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before returning, also when the game loop fails.
#[instrument(skip(config))]
pub async fn run_tui(config: &AppConfig, mode: Mode) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (app, mut ai_rx) = App::new(mode, *config.ai_mark(), config.ai_delay());
    let res = run_app(&mut terminal, app, &mut ai_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, apply delayed computer moves, poll keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    ai_rx: &mut mpsc::UnboundedReceiver<AiTicket>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(ticket) = ai_rx.try_recv() {
            app.handle_ai_ticket(ticket);
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports both press and release on some platforms.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key.code);
        }

        if *app.should_quit() {
            return Ok(());
        }

        // Let the scheduler's timer tasks make progress.
        tokio::task::yield_now().await;
    }
}
