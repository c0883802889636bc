//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square};
use tracing::instrument;

/// Three positions that form a line.
pub type Triple = [Position; 3];

/// Every winning line, in the order they are checked.
pub const WINNING_LINES: [Triple; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [
        Position::TopRight,
        Position::Center,
        Position::BottomLeft,
    ],
];

/// Returns the first completed line, scanning [`WINNING_LINES`] in order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Triple> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.place(pos, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(winning_line(&board), Some(WINNING_LINES[7]));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_declared_line_wins() {
        // Hypothetical board with two lines: the middle column and the
        // bottom row. Rows are declared first.
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(winning_line(&board), Some(WINNING_LINES[2]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|pos| (pos, Player::X)));
            assert_eq!(winning_line(&board), Some(line));
        }
    }
}
