use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::error::{BoardError, BoardResult};
use crate::types::*;

/// The most recent applied move, kept so the next move can capture en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub piece: Piece,
    pub to: Square,
    /// Pawn double step from its starting row; enables en passant next turn.
    pub double_step: bool,
}

#[derive(Clone, Debug)]
pub struct Board {
    squares: [Option<Piece>; 64],
    locations: HashMap<PieceId, Square>,
    current_player: Player,
    last_move: Option<LastMove>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            locations: HashMap::new(),
            current_player: Player::White,
            last_move: None,
        }
    }

    pub fn at_starting_position() -> Self {
        let mut b = Board::empty();

        for col in 0..BOARD_SIZE {
            b.set_piece(Square::at(1, col), Some(Piece::pawn(Player::White)));
            b.set_piece(Square::at(6, col), Some(Piece::pawn(Player::Black)));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            b.set_piece(Square::at(0, col), Some(Piece::new(kind, Player::White)));
            b.set_piece(Square::at(7, col), Some(Piece::new(kind, Player::Black)));
        }
        b
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hands the move to `player` without playing anything. Used to set up positions.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|i| self.squares[i])
    }

    /// Places `piece` on `square` (or clears it) with no legality check.
    ///
    /// A piece already standing elsewhere on this board is lifted from its
    /// old square, and any occupant of `square` is dropped from the board.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        let Some(idx) = square.index() else {
            warn!(%square, "ignoring placement off the board");
            return;
        };

        if let Some(old) = self.squares[idx].take() {
            self.locations.remove(&old.id());
        }
        if let Some(pc) = piece {
            if let Some(prev) = self.locations.insert(pc.id(), square) {
                if let Some(prev_idx) = prev.index() {
                    self.squares[prev_idx] = None;
                }
            }
        }
        self.squares[idx] = piece;
    }

    pub fn is_square_empty(&self, square: Square) -> bool {
        self.get_piece(square).is_none()
    }

    pub fn are_squares_empty<I>(&self, squares: I) -> bool
    where
        I: IntoIterator<Item = Square>,
    {
        squares.into_iter().all(|s| self.is_square_empty(s))
    }

    /// True when the occupants of `from` and `to` belong to different players.
    ///
    /// Callers check that both squares are occupied first; an empty square
    /// never yields a capture.
    pub fn capture_possible(&self, from: Square, to: Square) -> bool {
        match (self.get_piece(from), self.get_piece(to)) {
            (Some(a), Some(b)) => a.player != b.player,
            _ => false,
        }
    }

    /// Square currently holding this exact piece instance.
    pub fn find_piece(&self, piece: &Piece) -> BoardResult<Square> {
        self.locations
            .get(&piece.id())
            .copied()
            .ok_or(BoardError::PieceNotFound { piece: piece.id() })
    }

    /// Location and current board state (e.g. its `moved` flag) of a piece.
    pub(crate) fn locate(&self, piece: &Piece) -> BoardResult<(Square, Piece)> {
        let square = self.find_piece(piece)?;
        let current = self
            .get_piece(square)
            .ok_or(BoardError::PieceNotFound { piece: piece.id() })?;
        Ok((square, current))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (Square::from_index(i), pc)))
    }

    /// Moves whatever stands on `from` to `to`, applying promotion, castling
    /// and en passant side effects, then passes the turn.
    ///
    /// Returns false and leaves the board untouched when `from` does not hold
    /// a piece of the side to move or `to` is off the board. The destination
    /// is not checked against the piece's generated moves.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        let Some(moving) = self.get_piece(from) else {
            trace!(%from, %to, "ignoring move from an empty square");
            return false;
        };
        if moving.player != self.current_player {
            trace!(%from, %to, player = %moving.player, "ignoring move out of turn");
            return false;
        }
        if !to.is_on_board() {
            trace!(%from, %to, "ignoring move off the board");
            return false;
        }

        let mut placed = moving;
        if moving.kind == PieceKind::Pawn && (to.row == 0 || to.row == BOARD_SIZE - 1) {
            placed = Piece::queen(moving.player);
            debug!(%to, player = %moving.player, "pawn promoted to queen");
        }

        if moving.kind == PieceKind::King && (from.col - to.col).abs() > 1 {
            self.castle_rook(from, to);
        }

        let mut double_step = false;
        if moving.kind == PieceKind::Pawn {
            self.capture_en_passant(from, to);
            double_step = (from.row == 1 && to.row == 3) || (from.row == 6 && to.row == 4);
        }

        // Clear first so a move onto its own square keeps the piece.
        self.set_piece(from, None);
        placed.moved = true;
        self.set_piece(to, Some(placed));

        self.last_move = Some(LastMove {
            piece: placed,
            to,
            double_step,
        });
        debug!(%from, %to, piece = %placed, double_step, "move applied");
        self.current_player = self.current_player.opponent();
        true
    }

    /// Rook half of a castling move: the corner rook on the side the king
    /// travels towards lands next to the king's destination.
    fn castle_rook(&mut self, king_from: Square, king_to: Square) {
        let row = king_to.row;
        let (corner, landing) = if king_to.col < king_from.col {
            (Square::at(row, 0), Square::at(row, 3))
        } else {
            (Square::at(row, BOARD_SIZE - 1), Square::at(row, 5))
        };
        let Some(mut rook) = self.get_piece(corner) else {
            warn!(%king_from, %king_to, "king moved two columns with no piece in the corner");
            return;
        };
        rook.moved = true;
        self.set_piece(landing, Some(rook));
        debug!(%corner, %landing, "castling rook relocated");
    }

    fn capture_en_passant(&mut self, from: Square, to: Square) {
        let Some(last) = self.last_move else {
            return;
        };
        if last.double_step && last.to.row == from.row && last.to.col == to.col {
            self.set_piece(last.to, None);
            debug!(captured = %last.to, "en passant capture");
        }
    }

    /// Square of a king some piece can move onto, if any.
    pub fn in_check(&self) -> Option<Square> {
        crate::check::find_attacked_king(self)
    }

    /// Square of `player`'s king when an opposing piece can move onto it.
    pub fn king_in_check(&self, player: Player) -> Option<Square> {
        crate::check::king_attacked(self, player)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
