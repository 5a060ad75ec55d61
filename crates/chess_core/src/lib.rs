pub mod board;
pub mod check;
pub mod error;
pub mod movegen;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use check::{find_attacked_king, king_attacked};
pub use error::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by automated opponents
// =============================================================================

/// A move chosen by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Material value of whatever stood on `to` (0 for a quiet move)
    pub score: u32,
}

/// Trait that all automated opponents implement.
pub trait Engine: Send {
    /// Choose a move for the side to move on `board` without playing it.
    ///
    /// Fails with [`BoardError::NoAvailableMoves`] when that side has
    /// nothing to move; no stalemate or checkmate handling exists.
    fn select_move(&mut self, board: &Board) -> BoardResult<BotMove>;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Choose a move and play it through [`Board::move_piece`].
    ///
    /// Fails with [`BoardError::MoveRejected`] when the board refuses the
    /// selected move, e.g. a piece of the side not to move.
    fn play(&mut self, board: &mut Board) -> BoardResult<BotMove> {
        let mv = self.select_move(board)?;
        if !board.move_piece(mv.from, mv.to) {
            return Err(BoardError::MoveRejected {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(mv)
    }
}
