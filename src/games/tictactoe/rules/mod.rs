//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They never mutate and never look at
//! whose turn it is, so the AI can ask the same questions about
//! hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Triple, WINNING_LINES, winning_line};

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the board says after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No line and at least one empty square.
    Ongoing,
    /// Three identical marks along this triple.
    Line(Triple),
    /// Board full without a line.
    Draw,
}

/// Evaluates a board: first completed line in declared order, then draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(line) = winning_line(board) {
        Verdict::Line(line)
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
