//! Capture-Value Chess Engine
//!
//! A one-ply opponent: every move is scored by the material value of the
//! piece it would capture, and the best-scoring move is played.
//!
//! Selection works per piece. Each piece that can move contributes its own
//! best destination (the first one seen wins a tie). One of those candidates
//! is drawn at random as a starting point, then a linear scan replaces it only
//! with a strictly higher score. When several pieces tie for the best score,
//! the random draw decides which of them moves.

use chess_core::{Board, BoardError, BoardResult, BotMove, Engine, Player, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// Value of whatever stands on `to`, 0 when it is empty.
pub fn capture_value(board: &Board, to: Square) -> u32 {
    board.get_piece(to).map_or(0, |pc| pc.value())
}

/// Best (piece, destination) pair per piece of `player`, in board scan order.
pub fn candidates(board: &Board, player: Player) -> Vec<BotMove> {
    board
        .all_available_moves(player)
        .into_iter()
        .filter_map(|pm| {
            let mut best: Option<BotMove> = None;
            for &to in &pm.destinations {
                let score = capture_value(board, to);
                if best.map_or(true, |b| score > b.score) {
                    best = Some(BotMove {
                        piece: pm.piece,
                        from: pm.from,
                        to,
                        score,
                    });
                }
            }
            best
        })
        .collect()
}

/// A chess engine that plays the most valuable capture it can find.
///
/// The random source is injectable so selection can be made reproducible.
#[derive(Debug, Clone)]
pub struct CaptureEngine<R = StdRng> {
    rng: R,
}

impl CaptureEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CaptureEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CaptureEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Choose a move for `player` regardless of whose turn it is.
    pub fn select_for(&mut self, board: &Board, player: Player) -> BoardResult<BotMove> {
        let pool = candidates(board, player);
        if pool.is_empty() {
            return Err(BoardError::NoAvailableMoves { player });
        }

        let mut chosen = pool[self.rng.gen_range(0..pool.len())];
        for c in &pool {
            if c.score > chosen.score {
                chosen = *c;
            }
        }

        debug!(
            %player,
            from = %chosen.from,
            to = %chosen.to,
            score = chosen.score,
            candidates = pool.len(),
            "capture engine selected move"
        );
        Ok(chosen)
    }
}

impl<R: Rng + Send> Engine for CaptureEngine<R> {
    fn select_move(&mut self, board: &Board) -> BoardResult<BotMove> {
        self.select_for(board, board.current_player())
    }

    fn name(&self) -> &str {
        "Capture v1.0"
    }
}
