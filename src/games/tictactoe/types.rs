//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares only ever go from empty to occupied. The one way back is
/// replacing the whole board with [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from explicit squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// Returns `false` and leaves the board untouched when the square is
    /// already occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            return false;
        }
        *square = Square::Occupied(player);
        true
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Active,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a result.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Who the second seat belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[value(name = "pvp")]
    #[serde(rename = "pvp")]
    #[display("Player vs Player")]
    PlayerVsPlayer,
    /// One human against the computer.
    #[value(name = "ai")]
    #[serde(rename = "ai")]
    #[display("Player vs AI")]
    PlayerVsAi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_square() {
        let mut board = Board::new();
        assert!(board.place(Position::Center, Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_place_on_occupied_square_is_noop() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);
        let before = board.clone();

        assert!(!board.place(Position::Center, Player::O));
        assert_eq!(board, before);
    }

    #[test]
    fn test_get_index_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get_index(8), Some(Square::Empty));
        assert_eq!(board.get_index(9), None);
    }

    #[test]
    fn test_display_shows_key_hints() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::Center, Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_parses_from_str() {
        assert_eq!("O".parse::<Player>(), Ok(Player::O));
        assert!("Z".parse::<Player>().is_err());
    }
}
