//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Player, Position, SessionView};

const HELP_TEXT: &str = "1-9/arrows+Enter: move | R: Reset | P: vs Player | A: vs AI | Q: Quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Tic Tac Toe - {}", view.mode))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &view, *app.cursor());

    let status_text = if view.ai_thinking {
        format!("{} (thinking...)", view.status_text)
    } else {
        view.status_text.clone()
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], view, cursor, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], view, cursor, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], view, cursor, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], view, cursor, start);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], view, cursor, start + 1);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], view, cursor, start + 2);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position, index: usize) {
    let (symbol, base_style) = match view.cells[index] {
        None => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.is_highlighted(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if index == cursor.to_index() && !view.finished {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in its 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(symbol, style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mode;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_mode() {
        let (app, _rx) = App::new(Mode::PlayerVsPlayer, Player::O, Duration::from_millis(10));
        let screen = render(&app);
        assert!(screen.contains("It's X's turn"));
        assert!(screen.contains("Player vs Player"));
        assert!(screen.contains(HELP_TEXT));
    }

    #[test]
    fn test_renders_marks_and_result() {
        let (mut app, _rx) = App::new(Mode::PlayerVsPlayer, Player::O, Duration::from_millis(10));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Player X wins!"));
        assert!(screen.contains('X'));
        assert!(screen.contains('O'));
    }
}
