use std::fmt;

use crate::chess::board::Board;
use crate::chess::piece::{Piece, PieceKind, Player};
use crate::core::coord::Coord;

/// Why a candidate move is not legal.
///
/// Rejections are ordinary values: the engine never panics on an illegal
/// move, callers re-prompt or skip instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    /// A source or destination coordinate lies outside the board.
    OutOfRange { at: Coord },
    /// Destination equals the source.
    SameSquare,
    /// Destination holds a piece of the moving player (enemy occupancy is a capture, not a rejection).
    Occupied { at: Coord },
    /// The destination does not fit the piece kind's movement geometry.
    BadGeometry { kind: PieceKind, from: Coord, to: Coord },
    /// The requested piece is not on the board.
    NoSuchPiece { kind: PieceKind, player: Player },
    /// The board already holds this (player, kind) piece; each side has at
    /// most one of each kind.
    DuplicatePiece { kind: PieceKind, player: Player },
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::OutOfRange { at } => write!(f, "coordinate {at} is outside the board"),
            Reject::SameSquare => write!(f, "destination equals the source square"),
            Reject::Occupied { at } => write!(f, "square {at} already holds a friendly piece"),
            Reject::BadGeometry { kind, from, to } => {
                write!(f, "{kind:?} cannot move {from} -> {to}")
            }
            Reject::NoSuchPiece { kind, player } => {
                write!(f, "{player:?} has no {kind:?} on the board")
            }
            Reject::DuplicatePiece { kind, player } => {
                write!(f, "{player:?} already has a {kind:?} on the board")
            }
        }
    }
}

impl std::error::Error for Reject {}

/// A candidate move, with its legality verdict computed once at construction
/// and never recomputed.
///
/// Only valid actions may be applied to a board; [`Board::apply`] enforces
/// this by re-checking the stored verdict.
#[derive(Debug, Clone, Copy)]
pub struct Action {
    piece: Piece,
    from: Coord,
    to: Coord,
    reject: Option<Reject>,
}

impl Action {
    /// Build an action moving `piece` (as currently placed) to `to` and
    /// validate it against `board`.
    pub fn new(piece: Piece, to: Coord, board: &Board) -> Self {
        let from = piece.pos;
        let reject = validate(&piece, from, to, board).err();
        Self {
            piece,
            from,
            to,
            reject,
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn from(&self) -> Coord {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Coord {
        self.to
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.reject.is_none()
    }

    #[inline]
    pub fn reject(&self) -> Option<Reject> {
        self.reject
    }
}

/// All legality rules, checked in order: bounds, same-square, friendly
/// occupancy, piece geometry. The first failure wins.
fn validate(piece: &Piece, from: Coord, to: Coord, board: &Board) -> Result<(), Reject> {
    let size = board.size();
    if !from.in_bounds(size) {
        return Err(Reject::OutOfRange { at: from });
    }
    if !to.in_bounds(size) {
        return Err(Reject::OutOfRange { at: to });
    }
    if from == to {
        return Err(Reject::SameSquare);
    }

    if let Some(occupant) = board.piece_at(to)? {
        if occupant.player == piece.player {
            return Err(Reject::Occupied { at: to });
        }
    }

    let delta = to - from;
    let fits = match piece.kind {
        PieceKind::King => delta.chebyshev_norm() <= 1,
        // Sliding pieces are not blocked by intervening pieces on this board.
        PieceKind::Rook => from.row == to.row || from.col == to.col,
        PieceKind::Bishop => delta.row.abs() == delta.col.abs(),
    };
    if !fits {
        return Err(Reject::BadGeometry {
            kind: piece.kind,
            from,
            to,
        });
    }

    Ok(())
}
