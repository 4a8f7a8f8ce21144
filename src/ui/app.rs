use super::session::Session;
use crate::config::DisplayConfig;
use crate::game::COLS;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: Session,
    display: DisplayConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, display: DisplayConfig) -> Self {
        App {
            session,
            display,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_disc();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('r') => {
                self.session.restart();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drop the active player's disc in the selected column
    fn drop_disc(&mut self) {
        if self.session.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.session.submit(self.selected_column + 1) {
            Ok(()) => {
                // Check if game just ended
                self.message = self.session.announcement();
            }
            Err(err) => {
                debug!("move rejected: {err}");
                self.message = Some(format!("{err}, try again"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
            self.display.highlight_winner,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::default(), DisplayConfig::default())
    }
}
