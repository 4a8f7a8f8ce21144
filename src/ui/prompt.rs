//! Line-oriented front end: prints the board to a plain terminal and reads
//! column choices one line at a time.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color as TermColor, ContentStyle},
    terminal::{Clear, ClearType},
};
use log::debug;
use ratatui::{
    style::{Color, Modifier},
    text::Line,
};

use super::board_widget::board_lines;
use super::session::Session;
use crate::config::DisplayConfig;
use crate::game::{Board, COLS};

const PROMPT: &str = "Please select a column [1-7]: ";

/// Play `session` to the end, reading moves from `input` and drawing to `output`.
///
/// Rejected moves are reported and the same player is asked again. Running out
/// of input ends the loop early without an error.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session,
    display: &DisplayConfig,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut notice: Option<String> = None;

    while !session.is_over() {
        draw(output, session.board(), false, display)?;
        if let Some(text) = notice.take() {
            writeln!(output, "{text}")?;
        }
        writeln!(output, "{}'s turn to drop", session.active_player().name)?;

        let Some(column) = read_column(&mut input, output)? else {
            debug!("input closed before the game finished");
            return Ok(());
        };
        if let Err(err) = session.submit(column) {
            notice = Some(format!("{err}\ntry again..."));
        }
    }

    draw(output, session.board(), display.highlight_winner, display)?;
    if let Some(text) = session.announcement() {
        writeln!(output, "{text}")?;
    }
    output.flush()
}

/// Ask until a line holds a single digit 1-7. `None` on end of input.
fn read_column<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_column(line.trim_end_matches(['\r', '\n'])) {
            Some(column) => return Ok(Some(column)),
            None => writeln!(output, "[INVALID INPUT] try again...")?,
        }
    }
}

/// Exactly one digit naming a column, no surrounding text.
fn parse_column(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    let digit = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || !(1..=COLS).contains(&digit) {
        return None;
    }
    Some(digit)
}

fn draw<W: Write>(
    output: &mut W,
    board: &Board,
    highlight: bool,
    display: &DisplayConfig,
) -> io::Result<()> {
    if display.clear_screen {
        queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    let streak = if highlight { board.win_streak() } else { &[] };
    for line in board_lines(&board.cloned_grid(), streak) {
        write_line(output, &line)?;
    }
    Ok(())
}

/// Write a styled line as ANSI-coloured text.
fn write_line<W: Write>(output: &mut W, line: &Line) -> io::Result<()> {
    for span in &line.spans {
        let mut style = ContentStyle::new();
        style.foreground_color = span.style.fg.map(term_color);
        style.background_color = span.style.bg.map(term_color);
        if span.style.add_modifier.contains(Modifier::BOLD) {
            style.attributes.set(Attribute::Bold);
        }
        write!(output, "{}", style.apply(span.content.as_ref()))?;
    }
    writeln!(output)
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::White => TermColor::White,
        _ => TermColor::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet() -> DisplayConfig {
        DisplayConfig {
            clear_screen: false,
            highlight_winner: true,
        }
    }

    fn run(moves: &str) -> (Session, String) {
        let mut session = Session::default();
        let mut out = Vec::new();
        play(&mut session, &quiet(), Cursor::new(moves), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("1"), Some(1));
        assert_eq!(parse_column("7"), Some(7));
        assert_eq!(parse_column("0"), None);
        assert_eq!(parse_column("8"), None);
        assert_eq!(parse_column("12"), None);
        assert_eq!(parse_column(" 3"), None);
        assert_eq!(parse_column("a"), None);
        assert_eq!(parse_column(""), None);
    }

    #[test]
    fn test_red_wins_game() {
        let (session, out) = run("1\n1\n2\n2\n3\n3\n4\n");
        assert!(session.is_over());
        assert!(out.contains("Red's turn to drop"));
        assert!(out.contains("Green's turn to drop"));
        assert!(out.ends_with("Game over! Red wins!\n"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (session, out) = run("9\nx\n\n4\n");
        assert_eq!(out.matches("[INVALID INPUT] try again...").count(), 3);
        assert_eq!(out.matches(PROMPT).count(), 5);
        assert_eq!(session.board().get(3, 0), Some(session.roster().one.token));
        assert_eq!(session.active_player().name, "Green");
    }

    #[test]
    fn test_rejected_move_keeps_player() {
        // Six drops fill column 1; the seventh is refused and Red asks again.
        let (session, out) = run("1\n1\n1\n1\n1\n1\n1\n2\n");
        assert!(out.contains("column [1] is full\ntry again..."));
        assert_eq!(session.board().get(1, 0), Some(session.roster().one.token));
        assert_eq!(session.active_player().name, "Green");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (session, _) = run("4\r\n");
        assert_eq!(session.board().get(3, 0), Some(session.roster().one.token));
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (session, out) = run("3\n");
        assert!(!session.is_over());
        assert!(!out.contains("Game over!"));
    }

    #[test]
    fn test_tie_announced() {
        let moves = [
            1, 3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 1, 2, 4, 4, 4, 4, 4, 4, 2, 2, 2, 2, 2, 5, 7, 7, 7, 7,
            7, 7, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
        ];
        let input: String = moves.iter().map(|col| format!("{col}\n")).collect();
        let (session, out) = run(&input);
        assert!(session.board().is_full());
        assert!(out.ends_with("Game over! It's a tie!\n"));
    }

    #[test]
    fn test_clear_screen_emits_escape() {
        let mut session = Session::default();
        let mut out = Vec::new();
        play(
            &mut session,
            &DisplayConfig::default(),
            Cursor::new("1\n"),
            &mut out,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\u{1b}["));
    }
}
