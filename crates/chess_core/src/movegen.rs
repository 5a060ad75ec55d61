use crate::{board::Board, error::BoardResult, types::*};

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Longest ray a slider can walk on an 8x8 board.
const SLIDE: u8 = 7;
const STEP: u8 = 1;

/// One side's piece together with every destination it can reach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceMoves {
    pub from: Square,
    pub piece: Piece,
    pub destinations: Vec<Square>,
}

impl Piece {
    /// Every square this piece may move to from where it stands on `board`.
    pub fn available_moves(&self, board: &Board) -> BoardResult<Vec<Square>> {
        let (from, current) = board.locate(self)?;
        Ok(destinations(board, from, &current))
    }

    /// Squares reachable by stepping along `direction` until the edge, a
    /// friendly piece (excluded) or an enemy piece (included) ends the ray.
    /// Kings and knights take a single step.
    pub fn moves_in_direction(
        &self,
        board: &Board,
        direction: (i8, i8),
    ) -> BoardResult<Vec<Square>> {
        let from = board.find_piece(self)?;
        let mut out = Vec::new();
        let limit = match self.kind {
            PieceKind::King | PieceKind::Knight => STEP,
            _ => SLIDE,
        };
        cast_ray(board, from, self.player, direction, limit, &mut out);
        Ok(out)
    }

    /// Locates the piece and hands the move to [`Board::move_piece`].
    pub fn move_to(&self, board: &mut Board, destination: Square) -> BoardResult<bool> {
        let from = board.find_piece(self)?;
        Ok(board.move_piece(from, destination))
    }
}

/// Destinations of `piece` standing on `from`.
pub fn destinations(board: &Board, from: Square, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(16);
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, from, piece, &mut out),
        PieceKind::Knight => gen_steps(board, from, piece.player, &KNIGHT_JUMPS, &mut out),
        PieceKind::Bishop => gen_rays(board, from, piece.player, &DIAGONALS, SLIDE, &mut out),
        PieceKind::Rook => gen_rays(board, from, piece.player, &ORTHOGONALS, SLIDE, &mut out),
        PieceKind::Queen => {
            gen_rays(board, from, piece.player, &DIAGONALS, SLIDE, &mut out);
            gen_rays(board, from, piece.player, &ORTHOGONALS, SLIDE, &mut out);
        }
        PieceKind::King => {
            gen_rays(board, from, piece.player, &DIAGONALS, STEP, &mut out);
            gen_rays(board, from, piece.player, &ORTHOGONALS, STEP, &mut out);
            gen_castle(board, from, piece, &mut out);
        }
    }
    out
}

/// Every piece of `player` that has at least one destination, in row-major order.
pub fn all_available_moves(board: &Board, player: Player) -> Vec<PieceMoves> {
    board
        .pieces()
        .filter(|(_, pc)| pc.player == player)
        .filter_map(|(from, piece)| {
            let dests = destinations(board, from, &piece);
            (!dests.is_empty()).then_some(PieceMoves {
                from,
                piece,
                destinations: dests,
            })
        })
        .collect()
}

impl Board {
    pub fn all_available_moves(&self, player: Player) -> Vec<PieceMoves> {
        all_available_moves(self, player)
    }
}

fn cast_ray(
    board: &Board,
    from: Square,
    player: Player,
    (dr, dc): (i8, i8),
    limit: u8,
    out: &mut Vec<Square>,
) {
    let mut to = from;
    for _ in 0..limit {
        to = match to.translate_by((dr, dc)) {
            Some(next) if next.is_on_board() => next,
            _ => break,
        };
        match board.get_piece(to) {
            None => out.push(to),
            Some(pc) if pc.player != player => {
                out.push(to);
                break;
            }
            _ => break,
        }
    }
}

fn gen_rays(
    board: &Board,
    from: Square,
    player: Player,
    dirs: &[(i8, i8)],
    limit: u8,
    out: &mut Vec<Square>,
) {
    for &dir in dirs {
        cast_ray(board, from, player, dir, limit, out);
    }
}

fn gen_steps(
    board: &Board,
    from: Square,
    player: Player,
    deltas: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    gen_rays(board, from, player, deltas, STEP, out);
}

fn gen_pawn(board: &Board, from: Square, pawn: &Piece, out: &mut Vec<Square>) {
    let dir = pawn.player.pawn_direction();

    let on_board = |sq: Option<Square>| sq.filter(|s| s.is_on_board());

    // forward 1
    if let Some(one) = on_board(from.translate_by((dir, 0))) {
        if board.is_square_empty(one) {
            out.push(one);

            // forward 2 from start
            if let Some(two) = on_board(one.translate_by((dir, 0))) {
                if !pawn.moved
                    && from.row == pawn.player.pawn_start_row()
                    && board.is_square_empty(two)
                {
                    out.push(two);
                }
            }
        }
    }

    // captures
    for dc in [1, -1] {
        if let Some(to) = on_board(from.translate_by((dir, dc))) {
            if !board.is_square_empty(to) && board.capture_possible(from, to) {
                out.push(to);
            }
        }
    }
}

fn gen_castle(board: &Board, from: Square, king: &Piece, out: &mut Vec<Square>) {
    let row = king.player.back_row();
    if king.moved || from != Square::at(row, 4) {
        return;
    }

    // (rook column, king destination column)
    for (rook_col, dest_col) in [(0, 2), (BOARD_SIZE - 1, 6)] {
        let rook_ready = matches!(
            board.get_piece(Square::at(row, rook_col)),
            Some(pc) if pc.kind == PieceKind::Rook && pc.player == king.player && !pc.moved
        );
        if !rook_ready {
            continue;
        }
        let (lo, hi) = (rook_col.min(from.col), rook_col.max(from.col));
        if board.are_squares_empty((lo + 1..hi).map(|col| Square::at(row, col))) {
            out.push(Square::at(row, dest_col));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
