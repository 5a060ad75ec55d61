//! Error types for the game session

use chess_core::BoardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The board or engine rejected an operation
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to parse session config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize session config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
