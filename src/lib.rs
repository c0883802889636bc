//! Tic-tac-toe for two players or one player against a heuristic computer
//! opponent.
//!
//! # Architecture
//!
//! - **Games**: board, win detection, computer strategy and the
//!   [`GameSession`] turn controller
//! - **Scheduler**: delayed, cancellable delivery of the computer's turn
//! - **TUI**: ratatui front end that renders [`SessionView`]s
//! - **Config / CLI**: TOML settings and the clap command line
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameSession, Mode, MoveOutcome, Player, Position};
//!
//! let mut session = GameSession::new(Mode::PlayerVsAi, Player::O);
//! let MoveOutcome::AiTurn(ticket) = session.apply_move(0) else {
//!     unreachable!("the computer answers the first move");
//! };
//! session.play_ai_move(ticket);
//! assert_eq!(session.view().cells[Position::Center.to_index()], Some(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod games;
pub mod scheduler;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use games::tictactoe::{
    AiTicket, Board, BoardParseError, Choice, GameSession, GameStatus, Heuristic, Mode,
    MoveOutcome, Player, Position, Rejection, SessionView, Square, Triple, Verdict,
    WINNING_LINES, evaluate, select_move, to_notation,
};
pub use scheduler::AiScheduler;
