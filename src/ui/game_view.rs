use super::board_widget::{board_lines, token_color, BOARD_WIDTH};
use super::session::Session;
use crate::game::COLS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    message: &Option<String>,
    highlight_winner: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(15),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, highlight_winner, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let player = session.active_player();

    let (status, color) = if session.is_over() {
        ("Game Over".to_string(), Color::White)
    } else {
        (format!("{}'s turn", player.name), token_color(player.token))
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    highlight_winner: bool,
    area: Rect,
) {
    let board = session.board();
    let streak = if highlight_winner { board.win_streak() } else { &[] };

    let mut lines = vec![selector_line(selected_column, session.is_over())];
    lines.extend(board_lines(&board.cloned_grid(), streak));

    // Board lines differ in width, so centre a fixed-width column instead of
    // each line on its own.
    let [column] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines), column);
}

/// Arrow over the selected column, lined up with the disc centres.
fn selector_line(selected_column: usize, game_over: bool) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for col in 0..COLS {
        if col == selected_column && !game_over {
            spans.push(Span::styled(
                "\u{25bc}",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("1-7: Drop  |  \u{2190}/\u{2192}: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
