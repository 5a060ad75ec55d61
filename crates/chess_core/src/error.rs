//! Error types for board operations
//!
//! Illegal move attempts are not errors: `Board::move_piece` ignores them.
//! The variants here mark a caller breaking one of the board's contracts.

use thiserror::Error;

use crate::types::{PieceId, Player, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A piece was looked up on a board that does not hold it
    #[error("piece {piece} is not on the board")]
    PieceNotFound { piece: PieceId },

    /// Move selection was requested for a side with nothing to move
    #[error("{player} has no available moves")]
    NoAvailableMoves { player: Player },

    /// The board did not apply a move an engine selected
    #[error("move {from} -> {to} was rejected by the board")]
    MoveRejected { from: Square, to: Square },

    /// Text that does not name a square, e.g. "i9"
    #[error("invalid square coordinate: {text:?}")]
    InvalidCoordinate { text: String },
}

pub type BoardResult<T> = Result<T, BoardError>;
