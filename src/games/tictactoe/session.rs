//! Turn controller for a single game session.
//!
//! [`GameSession`] owns everything that changes during play: the board,
//! whose turn it is, the result, the mode and the winning line. Input that
//! doesn't fit the current state is ignored, never an error; the returned
//! [`MoveOutcome`] says what happened and why.

use super::rules::{self, Triple, Verdict};
use super::strategy::{self, Choice};
use super::types::{Board, GameStatus, Mode, Player};
use super::Position;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Permission for the computer to make one specific move.
///
/// Every reset bumps the session generation, so a ticket issued before
/// the reset no longer matches and is dropped when it arrives. The ply
/// count pins it to a single turn within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    generation: u64,
    ply: usize,
}

impl AiTicket {
    /// Generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Why an input was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The game already has a result.
    #[display("game is over")]
    GameOver,
    /// The square already holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
    /// The index is not 0-8.
    #[display("index {_0} is off the board")]
    OutOfRange(usize),
    /// The computer owns the current turn.
    #[display("waiting for the computer to move")]
    AwaitingAi,
    /// The ticket belongs to an earlier game.
    #[display("ticket from generation {_0} is stale")]
    StaleTicket(u64),
}

/// Result of feeding a move into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// Mark placed, the named player moves next.
    NextTurn(Player),
    /// Mark placed, the computer moves next once the ticket is redeemed.
    AiTurn(AiTicket),
    /// Mark placed and completed a line.
    Won {
        /// Owner of the line.
        winner: Player,
        /// The completed line.
        line: Triple,
    },
    /// Mark placed and filled the board.
    Draw,
}

impl MoveOutcome {
    /// Returns true when the input changed the board.
    pub fn was_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// One game session: board, turn, result and mode.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Mark to move, or the winner once the game is won.
    current: Player,
    /// Active, won or drawn.
    status: GameStatus,
    /// Survives resets.
    mode: Mode,
    /// Mark the computer plays in [`Mode::PlayerVsAi`].
    ai_mark: Player,
    /// Completed line, for highlighting.
    winning_line: Option<Triple>,
    /// Bumped on every reset.
    generation: u64,
}

impl GameSession {
    /// Creates a session with a fresh board.
    ///
    /// When the computer plays X in [`Mode::PlayerVsAi`] it owns the first
    /// turn; use [`GameSession::reset`] to obtain the ticket for it.
    #[instrument]
    pub fn new(mode: Mode, ai_mark: Player) -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::Active,
            mode,
            ai_mark,
            winning_line: None,
            generation: 0,
        }
    }

    /// Clears the board and starts over with X to move.
    ///
    /// Tickets issued before the reset become stale. Returns a fresh ticket
    /// when the computer moves first.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) -> Option<AiTicket> {
        self.board = Board::new();
        self.current = Player::X;
        self.status = GameStatus::Active;
        self.winning_line = None;
        self.generation = self.generation.wrapping_add(1);
        info!(generation = self.generation, "Game reset");
        self.is_ai_turn().then(|| self.ticket())
    }

    /// Switches mode and resets.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) -> Option<AiTicket> {
        self.mode = mode;
        self.reset()
    }

    /// Two humans, fresh board.
    pub fn start_vs_player(&mut self) -> Option<AiTicket> {
        self.select_mode(Mode::PlayerVsPlayer)
    }

    /// Human against the computer, fresh board.
    pub fn start_vs_ai(&mut self) -> Option<AiTicket> {
        self.select_mode(Mode::PlayerVsAi)
    }

    /// True while the computer owns the current turn.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == Mode::PlayerVsAi
            && self.status == GameStatus::Active
            && self.current == self.ai_mark
    }

    /// Applies a human move at `index` (0-8).
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(index) else {
            return ignore(Rejection::OutOfRange(index));
        };
        if self.status.is_terminal() {
            return ignore(Rejection::GameOver);
        }
        if self.is_ai_turn() {
            return ignore(Rejection::AwaitingAi);
        }
        if !self.board.is_empty(pos) {
            return ignore(Rejection::SquareOccupied(pos));
        }
        self.commit(pos)
    }

    /// Lets the computer take its turn.
    ///
    /// Dropped when the ticket predates the last reset or the turn no
    /// longer belongs to the computer.
    #[instrument(skip(self), fields(generation = ticket.generation))]
    pub fn play_ai_move(&mut self, ticket: AiTicket) -> MoveOutcome {
        if ticket.generation != self.generation {
            return ignore(Rejection::StaleTicket(ticket.generation));
        }
        if self.status.is_terminal() {
            return ignore(Rejection::GameOver);
        }
        if !self.is_ai_turn() || ticket.ply != self.ply() {
            return ignore(Rejection::StaleTicket(ticket.generation));
        }
        match strategy::select_move(&self.board, self.ai_mark) {
            Some(Choice { position, .. }) => self.commit(position),
            None => ignore(Rejection::GameOver),
        }
    }

    /// Status line for the current state.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Active => format!("It's {}'s turn", self.current),
            GameStatus::Won(player) => format!("Player {player} wins!"),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }

    /// Places the current mark, then settles win, draw or next turn.
    fn commit(&mut self, pos: Position) -> MoveOutcome {
        let mark = self.current;
        if !self.board.place(pos, mark) {
            return ignore(Rejection::SquareOccupied(pos));
        }
        debug!(position = %pos, %mark, board = %self.board.display(), "Mark placed");

        match rules::evaluate(&self.board) {
            Verdict::Line(line) => {
                self.status = GameStatus::Won(mark);
                self.winning_line = Some(line);
                info!(winner = %mark, "Game won");
                MoveOutcome::Won { winner: mark, line }
            }
            Verdict::Draw => {
                self.status = GameStatus::Draw;
                info!("Game drawn");
                MoveOutcome::Draw
            }
            Verdict::Ongoing => {
                self.current = mark.opponent();
                if self.is_ai_turn() {
                    MoveOutcome::AiTurn(self.ticket())
                } else {
                    MoveOutcome::NextTurn(self.current)
                }
            }
        }
    }

    fn ticket(&self) -> AiTicket {
        AiTicket {
            generation: self.generation,
            ply: self.ply(),
        }
    }

    /// Marks on the board so far.
    fn ply(&self) -> usize {
        9 - Position::valid_moves(&self.board).len()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default(), Player::O)
    }
}

fn ignore(reason: Rejection) -> MoveOutcome {
    debug!(%reason, "Input ignored");
    MoveOutcome::Ignored(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn pvp() -> GameSession {
        GameSession::new(Mode::PlayerVsPlayer, Player::O)
    }

    #[test]
    fn test_new_session_is_fresh() {
        let session = pvp();
        assert!(session.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(*session.current(), Player::X);
        assert_eq!(*session.status(), GameStatus::Active);
        assert_eq!(session.status_text(), "It's X's turn");
    }

    #[test]
    fn test_move_toggles_turn() {
        let mut session = pvp();
        assert_eq!(session.apply_move(4), MoveOutcome::NextTurn(Player::O));
        assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(session.status_text(), "It's O's turn");
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut session = pvp();
        session.apply_move(4);
        let before = session.board().clone();

        assert_eq!(
            session.apply_move(4),
            MoveOutcome::Ignored(Rejection::SquareOccupied(Position::Center))
        );
        assert_eq!(session.board(), &before);
        assert_eq!(*session.current(), Player::O);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut session = pvp();
        assert_eq!(
            session.apply_move(9),
            MoveOutcome::Ignored(Rejection::OutOfRange(9))
        );
    }

    #[test]
    fn test_win_sets_line_and_keeps_winner_current() {
        let mut session = pvp();
        for idx in [0, 3, 1, 4] {
            session.apply_move(idx);
        }
        let outcome = session.apply_move(2);
        assert_eq!(
            outcome,
            MoveOutcome::Won {
                winner: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
        assert_eq!(*session.status(), GameStatus::Won(Player::X));
        assert_eq!(*session.current(), Player::X);
        assert_eq!(session.status_text(), "Player X wins!");
        assert_eq!(
            session.apply_move(8),
            MoveOutcome::Ignored(Rejection::GameOver)
        );
    }

    #[test]
    fn test_reset_bumps_generation_and_clears_line() {
        let mut session = pvp();
        for idx in [0, 3, 1, 4, 2] {
            session.apply_move(idx);
        }
        let generation = *session.generation();
        assert_eq!(session.reset(), None);
        assert_eq!(*session.generation(), generation + 1);
        assert_eq!(*session.winning_line(), None);
        assert_eq!(*session.status(), GameStatus::Active);
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut session = GameSession::new(Mode::PlayerVsAi, Player::O);
        let MoveOutcome::AiTurn(_) = session.apply_move(0) else {
            panic!("computer should own the next turn");
        };
        assert_eq!(
            session.apply_move(1),
            MoveOutcome::Ignored(Rejection::AwaitingAi)
        );
    }

    #[test]
    fn test_computer_playing_x_opens() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Player::X);
        let ticket = session.start_vs_ai().expect("computer opens as X");
        assert_eq!(session.play_ai_move(ticket), MoveOutcome::NextTurn(Player::O));
        assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
    }
}
