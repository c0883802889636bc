//! Compact text notation for boards: nine cells, `X`, `O`, or `.` for empty.
//!
//! `-` and `_` also mean empty. Whitespace, `/` and `|` are separators and
//! are skipped, so `"XX./.O./..."` is the same board as `"XX..O...."`.

use super::types::{Board, Player, Square};
use derive_more::{Display, Error};
use std::str::FromStr;

/// Board notation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::new(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut squares = [Square::Empty; 9];
        for (square, ch) in squares.iter_mut().zip(cells) {
            *square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!("unexpected cell '{other}'")));
                }
            };
        }
        Ok(Board::from_squares(squares))
    }
}

/// Renders a board back into notation, one character per cell.
pub fn to_notation(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|square| match square {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        })
        .collect()
}
