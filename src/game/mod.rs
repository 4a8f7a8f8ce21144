//! Core Connect Four logic: the board engine with gravity placement, win-line
//! detection and lock state, plus the player roster.

mod board;
mod player;

pub use board::{Board, Coord, Grid, Palette, Token, COLS, ROWS};
pub use player::{Player, Roster, Seat};
