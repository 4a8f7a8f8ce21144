use log::debug;

use crate::error::MoveError;
use crate::game::{Board, Palette, Player, Roster, Seat};

/// How a finished game ended, from the players' point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Winner(&'a Player),
    Tie,
}

/// One game between the two roster players: owns the board and whose turn it is.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    palette: Palette,
    roster: Roster,
    active: Seat,
}

impl Session {
    pub fn new(palette: Palette, roster: Roster) -> Self {
        Session {
            board: Board::with_palette(palette.clone()),
            palette,
            roster,
            active: Seat::One,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn active_player(&self) -> &Player {
        self.roster.get(self.active)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_locked()
    }

    /// Drop the active player's disc into the 1-based `column`. The turn only
    /// passes on success; a rejected move keeps the same player.
    pub fn submit(&mut self, column: usize) -> Result<(), MoveError> {
        let token = self.active_player().token;
        self.board.drop_disc(token, column)?;
        debug!("{} dropped into column {column}", self.active_player().name);
        self.active = self.active.other();
        Ok(())
    }

    /// The player holding the board's winning token.
    pub fn winner_player(&self) -> Option<&Player> {
        self.board
            .winner()
            .and_then(|token| self.roster.owner_of(token))
    }

    /// `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome<'_>> {
        if !self.is_over() {
            return None;
        }
        Some(match self.winner_player() {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Tie,
        })
    }

    pub fn announcement(&self) -> Option<String> {
        self.outcome().map(|outcome| match outcome {
            Outcome::Winner(player) => format!("Game over! {} wins!", player.name),
            Outcome::Tie => "Game over! It's a tie!".to_string(),
        })
    }

    /// Start a fresh game; player one moves first.
    pub fn restart(&mut self) {
        self.board = Board::with_palette(self.palette.clone());
        self.active = Seat::One;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Palette::default(), Roster::default())
    }
}
