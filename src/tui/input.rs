//! Keyboard handling: cursor movement and key-to-command mapping.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Clear the board, keep the mode.
    Reset,
    /// New game between two humans.
    StartVsPlayer,
    /// New game against the computer.
    StartVsAi,
    /// Play the given square.
    Select(Position),
    /// Play the square under the cursor.
    SelectCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
}

/// Maps a key to a command, `None` for keys with no meaning.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('p') => Some(Command::StartVsPlayer),
        KeyCode::Char('a') => Some(Command::StartVsAi),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::SelectCursor),
        KeyCode::Char(c) => Position::from_key(c).map(Command::Select),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Edges don't wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
