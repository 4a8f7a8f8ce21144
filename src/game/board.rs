use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::MoveError;

pub const COLS: usize = 7;
pub const ROWS: usize = 6;

/// Discs in a line needed to win.
const CONNECT: usize = 4;

/// Win axes as the positive step of each direction pair, in check order:
/// horizontal, vertical, forward diagonal (/), backward diagonal (\).
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A cell marker, stored as the ANSI foreground colour code it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(u8);

impl Token {
    pub const fn new(code: u8) -> Self {
        Token(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The blank sentinel and the set of tokens a disc may carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub blank: Token,
    pub discs: Vec<Token>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            blank: Token::new(30),
            discs: (31..=37).map(Token::new).collect(),
        }
    }
}

impl Palette {
    /// Whether `token` may be dropped as a disc.
    pub fn is_disc(&self, token: Token) -> bool {
        token != self.blank && self.discs.contains(&token)
    }
}

/// Column-major cells: `grid[col][row]`, row 0 at the bottom.
pub type Grid = [[Token; ROWS]; COLS];

/// A zero-based (column, row) position; row 0 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    palette: Palette,
    locked: bool,
    winner: Option<Token>,
    win_streak: Vec<Coord>,
}

impl Board {
    /// Create an empty board with the default palette
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Board {
            grid: [[palette.blank; ROWS]; COLS],
            palette,
            locked: false,
            winner: None,
            win_streak: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_grid(grid: Grid) -> Self {
        Board {
            grid,
            ..Self::new()
        }
    }

    /// True once the game has been won or drawn. Never reset.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn winner(&self) -> Option<Token> {
        self.winner
    }

    /// Coordinates of the winning line, ordered along its axis. Empty until
    /// a win is recorded.
    pub fn win_streak(&self) -> &[Coord] {
        &self.win_streak
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// An independent copy of the grid for rendering.
    pub fn cloned_grid(&self) -> Grid {
        self.grid
    }

    /// Get the cell at a position, `None` when out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Token> {
        self.grid.get(col)?.get(row).copied()
    }

    /// Whether (col, row) lies outside the 7x6 board.
    pub fn out_of_bounds(col: isize, row: isize) -> bool {
        col < 0 || col >= COLS as isize || row < 0 || row >= ROWS as isize
    }

    /// Check if a zero-based column is full. Unknown columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.grid.get(col) {
            Some(cells) => cells[ROWS - 1] != self.palette.blank,
            None => true,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop `token` into the 1-based `column`.
    ///
    /// The disc lands on the lowest blank cell. A four-in-a-row through the new
    /// disc locks the board and records the winner; otherwise filling the last
    /// cell locks it as a draw. Every check runs before the grid is touched.
    pub fn drop_disc(&mut self, token: Token, column: usize) -> Result<(), MoveError> {
        if self.locked {
            return Err(MoveError::BoardLocked);
        }
        if !self.palette.is_disc(token) {
            return Err(MoveError::InvalidToken(token));
        }
        let col = match column.checked_sub(1) {
            Some(col) if col < COLS => col,
            _ => return Err(MoveError::ColumnOutOfBounds(column)),
        };
        let blank = self.palette.blank;
        let row = self.grid[col]
            .iter()
            .position(|&cell| cell == blank)
            .ok_or(MoveError::ColumnFull(column))?;

        self.grid[col][row] = token;
        debug!("token {token} landed at column {column}, row {row}");

        if let Some(streak) = self.find_streak(token, Coord::new(col, row)) {
            info!("token {token} wins with {} in a row", streak.len());
            self.locked = true;
            self.winner = Some(token);
            self.win_streak = streak;
            return Ok(());
        }

        if self.is_full() {
            info!("board full with no winner");
            self.locked = true;
        }
        Ok(())
    }

    /// First axis through `anchor` carrying a winning line of `token`.
    fn find_streak(&self, token: Token, anchor: Coord) -> Option<Vec<Coord>> {
        AXES.iter()
            .map(|&step| self.streak(token, anchor, step))
            .find(|line| line.len() >= CONNECT)
    }

    /// The contiguous `token` line through `anchor` along one axis, ordered
    /// from the far negative end to the far positive end.
    fn streak(&self, token: Token, anchor: Coord, (dc, dr): (isize, isize)) -> Vec<Coord> {
        let mut line = self.run(token, anchor, (-dc, -dr));
        line.reverse();
        line.push(anchor);
        line.extend(self.run(token, anchor, (dc, dr)));
        line
    }

    /// Cells matching `token` walking away from `from`, excluding `from`.
    fn run(&self, token: Token, from: Coord, (dc, dr): (isize, isize)) -> Vec<Coord> {
        let mut cells = Vec::new();
        let mut col = from.col as isize + dc;
        let mut row = from.row as isize + dr;
        while !Self::out_of_bounds(col, row) && self.grid[col as usize][row as usize] == token {
            cells.push(Coord::new(col as usize, row as usize));
            col += dc;
            row += dr;
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
