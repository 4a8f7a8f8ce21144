use crate::game::{Coord, Grid, Token, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const DISC: &str = "\u{25cf}";

/// Width in cells of every boxed row: a border plus four cells per column.
pub const BOARD_WIDTH: u16 = (4 * COLS + 1) as u16;

/// Terminal colour for a token's ANSI foreground code. Blank (30) is drawn dim
/// rather than black so empty cells stay visible on dark terminals.
pub fn token_color(token: Token) -> Color {
    match token.code() {
        30 => Color::DarkGray,
        31 => Color::Red,
        32 => Color::Green,
        33 => Color::Yellow,
        34 => Color::Blue,
        35 => Color::Magenta,
        36 => Color::Cyan,
        37 => Color::White,
        _ => Color::Reset,
    }
}

/// Draw a grid as boxed rows, top row first, followed by the column numbers.
/// Cells listed in `highlight` get a background.
pub fn board_lines(grid: &Grid, highlight: &[Coord]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(2 * ROWS + 2);

    lines.push(Line::from(border('\u{250c}', '\u{252c}', '\u{2510}')));
    for row in (0..ROWS).rev() {
        lines.push(level_line(grid, row, highlight));
        if row > 0 {
            lines.push(Line::from(border('\u{251c}', '\u{253c}', '\u{2524}')));
        }
    }
    lines.push(Line::from(border('\u{2514}', '\u{2534}', '\u{2518}')));

    let numbers: String = (1..=COLS).map(|col| format!(" {col}  ")).collect();
    lines.push(Line::from(format!(" {}", numbers.trim_end())));

    lines
}

fn level_line(grid: &Grid, row: usize, highlight: &[Coord]) -> Line<'static> {
    let mut spans = vec![Span::raw("\u{2502}")];
    for (col, cells) in grid.iter().enumerate() {
        let token = cells[row];
        let mut style = Style::default().fg(token_color(token));
        if highlight.contains(&Coord::new(col, row)) {
            style = style.bg(Color::Gray).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {DISC} "), style));
        spans.push(Span::raw("\u{2502}"));
    }
    Line::from(spans)
}

fn border(left: char, join: char, right: char) -> String {
    let segment = "\u{2500}".repeat(3);
    let mut line = String::new();
    line.push(left);
    for col in 0..COLS {
        line.push_str(&segment);
        line.push(if col + 1 == COLS { right } else { join });
    }
    line
}
