use std::path::PathBuf;

use crate::game::Token;

/// Rejections from [`Board::drop_disc`](crate::game::Board::drop_disc).
///
/// Validation runs before any mutation, so a rejected move leaves the board
/// exactly as it was. Columns are reported in the caller's 1-based numbering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("board is already locked")]
    BoardLocked,

    #[error("color code [{0}] is illegal")]
    InvalidToken(Token),

    #[error("column [{0}] is out of bounds")]
    ColumnOutOfBounds(usize),

    #[error("column [{0}] is full")]
    ColumnFull(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
