//! Heuristic move selection for the computer player.
//!
//! A fixed priority list, one ply deep: finish a line, stop the opponent's
//! line, take the center, take a corner, take whatever is left. There is no
//! fork detection, so a careful opponent can still beat it.

use super::rules::WINNING_LINES;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Heuristic {
    /// Completes a line for the computer.
    #[display("win")]
    WinNow,
    /// Fills the gap in the opponent's two-in-a-row.
    #[display("block")]
    Block,
    /// Takes the center square.
    #[display("center")]
    Center,
    /// Takes the first free corner.
    #[display("corner")]
    Corner,
    /// Takes the first free square in board order.
    #[display("first open")]
    FirstOpen,
}

/// A selected move and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Where to play.
    pub position: Position,
    /// Why.
    pub heuristic: Heuristic,
}

/// Picks a move for `mark`, or `None` when the board is full.
#[instrument(skip(board))]
pub fn select_move(board: &Board, mark: Player) -> Option<Choice> {
    let choice = completing_square(board, mark)
        .map(|position| (position, Heuristic::WinNow))
        .or_else(|| {
            completing_square(board, mark.opponent()).map(|position| (position, Heuristic::Block))
        })
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some((Position::Center, Heuristic::Center))
        })
        .or_else(|| {
            Position::CORNERS
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .map(|position| (position, Heuristic::Corner))
        })
        .or_else(|| {
            Position::ALL
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .map(|position| (position, Heuristic::FirstOpen))
        })
        .map(|(position, heuristic)| Choice {
            position,
            heuristic,
        });

    if let Some(choice) = &choice {
        debug!(position = %choice.position, heuristic = %choice.heuristic, "Selected move");
    }
    choice
}

/// First square that would give `mark` three in a row.
///
/// Lines are scanned in declared order. Within a line `[a, b, c]` the gap is
/// checked at `c`, then `b`, then `a`.
fn completing_square(board: &Board, mark: Player) -> Option<Position> {
    let own = Square::Occupied(mark);
    WINNING_LINES.into_iter().find_map(|[a, b, c]| {
        let [sa, sb, sc] = [a, b, c].map(|pos| board.get(pos));
        if sa == own && sb == own && sc == Square::Empty {
            Some(c)
        } else if sa == own && sc == own && sb == Square::Empty {
            Some(b)
        } else if sb == own && sc == own && sa == Square::Empty {
            Some(a)
        } else {
            None
        }
    })
}
