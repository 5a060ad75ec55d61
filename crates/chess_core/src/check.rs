//! Check detection built on ordinary move generation.
//!
//! Every occupied square's destinations are generated and compared against
//! king squares. A full board scan per query is fine at this size, so no
//! attack maps are cached.

use tracing::trace;

use crate::{board::Board, movegen::destinations, types::*};

/// First king square (row-major scan of attackers) that any piece can move onto.
pub fn find_attacked_king(board: &Board) -> Option<Square> {
    attacked_king_where(board, |_| true)
}

/// Square of `player`'s king when an opposing piece can move onto it.
pub fn king_attacked(board: &Board, player: Player) -> Option<Square> {
    attacked_king_where(board, |king| king.player == player)
}

fn attacked_king_where(board: &Board, wanted: impl Fn(&Piece) -> bool) -> Option<Square> {
    for (from, attacker) in board.pieces() {
        for to in destinations(board, from, &attacker) {
            if let Some(target) = board.get_piece(to) {
                if target.kind == PieceKind::King && wanted(&target) {
                    trace!(attacker = %attacker, king = %to, "king attacked");
                    return Some(to);
                }
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
