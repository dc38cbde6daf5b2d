use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
}

impl PieceKind {
    /// Move-generation order. Search tie-breaks follow this order, so it is
    /// part of the engine's observable behavior, not a cosmetic choice.
    pub const GENERATION_ORDER: [PieceKind; 3] = [PieceKind::Rook, PieceKind::King, PieceKind::Bishop];

    /// Material weight used by the zero-sum payoff.
    #[inline]
    pub fn weight(self) -> i32 {
        match self {
            PieceKind::King => 10_000,
            PieceKind::Rook => 5,
            PieceKind::Bishop => 3,
        }
    }

    /// One-letter tag used by renderings and CLIs.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }
}

/// A piece on the board. `pos` always equals the coordinate of the cell
/// holding the piece; [`crate::chess::board::Board`] maintains the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
    pub pos: Coord,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player, pos: Coord) -> Self {
        Self { kind, player, pos }
    }
}
