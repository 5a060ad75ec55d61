use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{BoardError, BoardResult};

pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a single forward pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    pub fn pawn_start_row(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Row holding this side's king and rooks in the starting arrangement.
    pub fn back_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

/// A (row, col) coordinate. Off-board values are representable so that
/// move generation can step past the edge and then reject the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn at(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Offset by `(dr, dc)`; `None` when a coordinate leaves the `i8` range.
    pub fn translate_by(self, (dr, dc): (i8, i8)) -> Option<Self> {
        Some(Self::at(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub(crate) fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Self::at((idx / BOARD_SIZE as usize) as i8, (idx % BOARD_SIZE as usize) as i8)
    }

    /// Algebraic name such as `e2`: column maps to file a..h, row to rank 1..8.
    pub fn to_coord(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let f = (b'a' + self.col as u8) as char;
        let r = (b'1' + self.row as u8) as char;
        Some(format!("{f}{r}"))
    }

    pub fn from_coord(c: &str) -> BoardResult<Self> {
        let invalid = || BoardError::InvalidCoordinate {
            text: c.to_string(),
        };
        let b = c.as_bytes();
        if b.len() != 2 {
            return Err(invalid());
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(invalid());
        }
        Ok(Self::at((r - b'1') as i8, (f - b'a') as i8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_coord() {
            Some(coord) => f.write_str(&coord),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used when scoring captures.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

/// Handle identifying one piece instance for as long as it is on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(0);

impl PieceId {
    fn next() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece instance. It does not know its square; the board maps its
/// [`PieceId`] to a location. Equality and hashing go by identity, so a
/// copy taken before a move still compares equal to the piece on the board.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    id: PieceId,
    pub kind: PieceKind,
    pub player: Player,
    pub moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player) -> Self {
        Self {
            id: PieceId::next(),
            kind,
            player,
            moved: false,
        }
    }

    pub fn pawn(player: Player) -> Self {
        Self::new(PieceKind::Pawn, player)
    }
    pub fn knight(player: Player) -> Self {
        Self::new(PieceKind::Knight, player)
    }
    pub fn bishop(player: Player) -> Self {
        Self::new(PieceKind::Bishop, player)
    }
    pub fn rook(player: Player) -> Self {
        Self::new(PieceKind::Rook, player)
    }
    pub fn queen(player: Player) -> Self {
        Self::new(PieceKind::Queen, player)
    }
    pub fn king(player: Player) -> Self {
        Self::new(PieceKind::King, player)
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl std::hash::Hash for Piece {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.player, self.kind, self.id)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
