//! Read-only projection of a session for whatever draws it.

use super::session::GameSession;
use super::types::{Mode, Player};
use serde::Serialize;

/// Everything a front end needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Mark per square, row-major.
    pub cells: [Option<Player>; 9],
    /// Status line.
    pub status_text: String,
    /// Indices of the winning line, empty unless someone won.
    pub highlight: Vec<usize>,
    /// Current mode.
    pub mode: Mode,
    /// Whose turn it is (the winner once the game is won).
    pub current: Player,
    /// True once the game has a result.
    pub finished: bool,
    /// True while the computer is about to move.
    pub ai_thinking: bool,
}

impl SessionView {
    /// True when `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.contains(&index)
    }
}

impl From<&GameSession> for SessionView {
    fn from(session: &GameSession) -> Self {
        let squares = *session.board().squares();
        Self {
            cells: squares.map(|square| square.mark()),
            status_text: session.status_text(),
            highlight: session
                .winning_line()
                .map(|line| line.map(|pos| pos.to_index()).to_vec())
                .unwrap_or_default(),
            mode: *session.mode(),
            current: *session.current(),
            finished: session.status().is_terminal(),
            ai_thinking: session.is_ai_turn(),
        }
    }
}

impl GameSession {
    /// Projects the session into a [`SessionView`].
    pub fn view(&self) -> SessionView {
        SessionView::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_fresh_session() {
        let view = GameSession::new(Mode::PlayerVsPlayer, Player::O).view();
        assert_eq!(view.cells, [None; 9]);
        assert_eq!(view.status_text, "It's X's turn");
        assert!(view.highlight.is_empty());
        assert!(!view.finished);
        assert!(!view.ai_thinking);
    }

    #[test]
    fn test_view_highlights_winning_line() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Player::O);
        for idx in [2, 0, 4, 1, 6] {
            session.apply_move(idx);
        }
        let view = session.view();
        assert_eq!(view.highlight, vec![2, 4, 6]);
        assert!(view.is_highlighted(4));
        assert!(!view.is_highlighted(0));
        assert!(view.finished);
        assert_eq!(view.status_text, "Player X wins!");
    }

    #[test]
    fn test_view_serializes() {
        let view = GameSession::default().view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["mode"], "pvp");
        assert_eq!(json["cells"][0], serde_json::Value::Null);

        let view = GameSession::new(Mode::PlayerVsAi, Player::O).view();
        assert_eq!(serde_json::to_value(&view).unwrap()["mode"], "ai");
    }
}
