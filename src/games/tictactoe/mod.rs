//! Tic-tac-toe: board, rules, computer strategy and the session that ties
//! them together.

mod notation;
mod position;
pub mod rules;
mod session;
pub mod strategy;
mod types;
mod view;

pub use notation::{BoardParseError, to_notation};
pub use position::Position;
pub use rules::{Triple, Verdict, WINNING_LINES, evaluate};
pub use session::{AiTicket, GameSession, MoveOutcome, Rejection};
pub use strategy::{Choice, Heuristic, select_move};
pub use types::{Board, GameStatus, Mode, Player, Square};
pub use view::SessionView;
