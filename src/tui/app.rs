//! Application state and logic.

use super::input::{self, Command};
use crate::games::tictactoe::{AiTicket, GameSession, Mode, MoveOutcome, Player, Position};
use crate::scheduler::AiScheduler;
use crossterm::event::KeyCode;
use derive_getters::Getters;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    session: GameSession,
    /// Square under the keyboard cursor.
    cursor: Position,
    /// Set when the user asks to leave.
    should_quit: bool,
    #[getter(skip)]
    scheduler: AiScheduler,
}

impl App {
    /// Creates the app and the receiver for delayed computer moves.
    ///
    /// If the computer opens, its first move is scheduled immediately, which
    /// needs a tokio runtime.
    pub fn new(
        mode: Mode,
        ai_mark: Player,
        ai_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<AiTicket>) {
        let (scheduler, rx) = AiScheduler::new(ai_delay);
        let mut app = Self {
            session: GameSession::new(mode, ai_mark),
            cursor: Position::Center,
            should_quit: false,
            scheduler,
        };
        let ticket = app.session.reset();
        app.follow_up(ticket);
        (app, rx)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(command) = input::command_for(key) {
            self.handle_command(command);
        }
    }

    /// Handles a decoded command.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Reset => {
                let ticket = self.session.reset();
                self.restart(ticket);
            }
            Command::StartVsPlayer => {
                let ticket = self.session.start_vs_player();
                self.restart(ticket);
            }
            Command::StartVsAi => {
                let ticket = self.session.start_vs_ai();
                self.restart(ticket);
            }
            Command::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Command::SelectCursor => self.select(self.cursor),
            Command::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
        }
    }

    /// Redeems a delayed computer move.
    #[instrument(skip(self))]
    pub fn handle_ai_ticket(&mut self, ticket: AiTicket) {
        let outcome = self.session.play_ai_move(ticket);
        self.after_move(outcome);
    }

    fn select(&mut self, pos: Position) {
        let outcome = self.session.apply_move(pos.to_index());
        self.after_move(outcome);
    }

    fn restart(&mut self, ticket: Option<AiTicket>) {
        self.scheduler.cancel();
        self.cursor = Position::Center;
        self.follow_up(ticket);
    }

    fn after_move(&mut self, outcome: MoveOutcome) {
        debug!(?outcome, "Move processed");
        if let MoveOutcome::AiTurn(ticket) = outcome {
            self.follow_up(Some(ticket));
        }
    }

    fn follow_up(&mut self, ticket: Option<AiTicket>) {
        if let Some(ticket) = ticket {
            self.scheduler.schedule(ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Square};

    fn pvp_app() -> App {
        App::new(Mode::PlayerVsPlayer, Player::O, Duration::from_millis(10)).0
    }

    #[test]
    fn test_digit_keys_play_squares() {
        let mut app = pvp_app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        let board = app.session().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_cursor_selection() {
        let mut app = pvp_app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.session().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = pvp_app();
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.session().board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(*app.session().status(), GameStatus::Active);

        app.handle_key(KeyCode::Char('q'));
        assert!(*app.should_quit());
    }

    #[tokio::test]
    async fn test_computer_answers_after_delay() {
        let (mut app, mut rx) = App::new(Mode::PlayerVsAi, Player::O, Duration::from_millis(10));
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.session().status_text(), "It's O's turn");

        let ticket = rx.recv().await.unwrap();
        app.handle_ai_ticket(ticket);
        assert_eq!(
            app.session().board().get(Position::Center),
            Square::Occupied(Player::O)
        );
        assert_eq!(app.session().status_text(), "It's X's turn");
    }

    #[tokio::test]
    async fn test_mode_switch_drops_pending_move() {
        let (mut app, mut rx) = App::new(Mode::PlayerVsAi, Player::O, Duration::from_millis(10));
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('p'));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(*app.session().mode(), Mode::PlayerVsPlayer);
        assert!(app.session().board().squares().iter().all(|s| *s == Square::Empty));
    }
}
