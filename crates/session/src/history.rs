//! In-memory record of the moves applied in a game

use chess_core::{Player, Square};

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub from: Square,
    pub to: Square,
    /// Played by the automated opponent rather than the human side
    pub by_bot: bool,
}

/// Applied moves of one game, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    pub moves: Vec<MoveRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
