use std::fmt;

use crate::chess::action::{Action, Reject};
use crate::chess::piece::{Piece, PieceKind, Player};
use crate::core::coord::Coord;

pub const DEFAULT_SIZE: i32 = 4;

/// Packed canonical encoding of a placement (not of the counters).
pub type PackedBoard = u128;

/// The authoritative piece placement: a `size`×`size` grid of cells, each
/// holding at most one piece, plus two counters:
///
/// - `plies`: moves applied along this (branch of the) game,
/// - `only_kings_plies`: moves applied while only the two kings remain,
///   used as a drawish-endgame cutoff.
///
/// Boards are deep-copied (`Clone`) per hypothetical move during search, so
/// sibling branches never observe each other's mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    cells: Vec<Option<Piece>>,
    plies: u32,
    only_kings_plies: u32,
}

impl Board {
    /// An empty board. `size` must be at least 1 and small enough for the
    /// packed encoding (3 bits per cell in a `u128`).
    pub fn empty(size: i32) -> Self {
        assert!(size >= 1);
        assert!(
            3 * size * size <= 128,
            "board packing would exceed 128 bits: {}",
            3 * size * size
        );
        Self {
            size,
            cells: vec![None; (size * size) as usize],
            plies: 0,
            only_kings_plies: 0,
        }
    }

    /// The fixed starting placement on the default 4×4 board:
    /// white R(0,0) K(0,1) B(0,2); black B(3,1) K(3,2) R(3,3).
    pub fn initial() -> Self {
        let mut board = Self::empty(DEFAULT_SIZE);
        let placement = [
            (PieceKind::Rook, Player::White, Coord::new(0, 0)),
            (PieceKind::King, Player::White, Coord::new(0, 1)),
            (PieceKind::Bishop, Player::White, Coord::new(0, 2)),
            (PieceKind::Bishop, Player::Black, Coord::new(3, 1)),
            (PieceKind::King, Player::Black, Coord::new(3, 2)),
            (PieceKind::Rook, Player::Black, Coord::new(3, 3)),
        ];
        for (kind, player, at) in placement {
            let idx = board.index(at);
            board.cells[idx] = Some(Piece::new(kind, player, at));
        }
        board
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        (at.row * self.size + at.col) as usize
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    #[inline]
    pub fn only_kings_plies(&self) -> u32 {
        self.only_kings_plies
    }

    /// Setup helper for tests and CLIs; rejects out-of-range cells, occupied
    /// cells and a second (player, kind) piece, so every placement the board
    /// accepts is one `find_piece` can see.
    pub fn place(&mut self, piece: Piece) -> Result<(), Reject> {
        let at = piece.pos;
        if !at.in_bounds(self.size) {
            return Err(Reject::OutOfRange { at });
        }
        let idx = self.index(at);
        if self.cells[idx].is_some() {
            return Err(Reject::Occupied { at });
        }
        if self.find_piece(piece.kind, piece.player).is_some() {
            return Err(Reject::DuplicatePiece {
                kind: piece.kind,
                player: piece.player,
            });
        }
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Occupant of a cell, or `Reject::OutOfRange` outside `[0, size)`.
    pub fn piece_at(&self, at: Coord) -> Result<Option<&Piece>, Reject> {
        if !at.in_bounds(self.size) {
            return Err(Reject::OutOfRange { at });
        }
        Ok(self.cells[self.index(at)].as_ref())
    }

    /// Linear scan for the unique (kind, player) piece, if it is still on the board.
    pub fn find_piece(&self, kind: PieceKind, player: Player) -> Option<&Piece> {
        self.cells
            .iter()
            .flatten()
            .find(|p| p.kind == kind && p.player == player)
    }

    /// The zero-sum evaluation: sum of present-piece weights, white minus
    /// black. Doubles as the terminal score.
    pub fn payoff(&self) -> i32 {
        let mut payoff = 0;
        for kind in PieceKind::GENERATION_ORDER {
            if self.find_piece(kind, Player::White).is_some() {
                payoff += kind.weight();
            }
            if self.find_piece(kind, Player::Black).is_some() {
                payoff -= kind.weight();
            }
        }
        payoff
    }

    /// All valid actions for `player`: piece kinds in
    /// [`PieceKind::GENERATION_ORDER`], destinations row-major.
    pub fn possible_actions(&self, player: Player) -> Vec<Action> {
        let mut out = Vec::new();
        for kind in PieceKind::GENERATION_ORDER {
            let Some(&piece) = self.find_piece(kind, player) else {
                continue;
            };
            for row in 0..self.size {
                for col in 0..self.size {
                    let act = Action::new(piece, Coord::new(row, col), self);
                    if act.is_valid() {
                        out.push(act);
                    }
                }
            }
        }
        out
    }

    /// Apply a validated action: vacate the source cell, write the piece to
    /// the destination (capturing any enemy occupant by overwrite), advance
    /// the ply counters.
    ///
    /// Invalid actions and actions whose piece is not where they claim are
    /// refused, never partially applied.
    pub fn apply(&mut self, action: &Action) -> Result<(), Reject> {
        if let Some(reject) = action.reject() {
            return Err(reject);
        }
        let claimed = action.piece();
        match self.piece_at(action.from())? {
            Some(p) if p.kind == claimed.kind && p.player == claimed.player => {}
            _ => {
                return Err(Reject::NoSuchPiece {
                    kind: claimed.kind,
                    player: claimed.player,
                })
            }
        }

        let from_idx = self.index(action.from());
        let to_idx = self.index(action.to());
        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(Piece::new(claimed.kind, claimed.player, action.to()));

        self.plies += 1;
        if self.only_kings_left() {
            self.only_kings_plies += 1;
        }
        Ok(())
    }

    fn only_kings_left(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|p| p.kind == PieceKind::King)
    }

    /// Terminal check. `None` (game continues) iff all of:
    ///
    /// - `plies` is below `horizon` (when a horizon is given at all; the live
    ///   game passes `None`, search branches pass their look-ahead),
    /// - both kings are on the board,
    /// - `only_kings_plies` is below `only_kings_cutoff`.
    ///
    /// Otherwise `Some(payoff())`.
    pub fn status(&self, horizon: Option<u32>, only_kings_cutoff: u32) -> Option<i32> {
        let horizon_hit = horizon.is_some_and(|h| self.plies >= h);
        let both_kings = self.find_piece(PieceKind::King, Player::White).is_some()
            && self.find_piece(PieceKind::King, Player::Black).is_some();

        if !horizon_hit && both_kings && self.only_kings_plies < only_kings_cutoff {
            None
        } else {
            Some(self.payoff())
        }
    }

    /// Zero the branch ply clock. Search entry points call this on their root
    /// copy so the horizon is measured per branch, not per game.
    pub fn reset_ply_clock(&mut self) {
        self.plies = 0;
    }

    /// Pack the placement into a `u128`, 3 bits per cell row-major
    /// (0 = empty, then player/kind codes). Distinct placements pack to
    /// distinct values; the counters are not encoded.
    pub fn packed(&self) -> PackedBoard {
        let mut v: PackedBoard = 0;
        let mut shift: u32 = 0;
        for cell in &self.cells {
            let code: u128 = match cell {
                None => 0,
                Some(p) => {
                    let kind = match p.kind {
                        PieceKind::King => 0,
                        PieceKind::Rook => 1,
                        PieceKind::Bishop => 2,
                    };
                    let side = match p.player {
                        Player::White => 0,
                        Player::Black => 3,
                    };
                    1 + kind + side
                }
            };
            v |= code << shift;
            shift += 3;
        }
        v
    }
}

impl fmt::Display for Board {
    /// Grid rendering, one row per line: `--` for an empty cell, otherwise
    /// the piece's kind and player letters (e.g. `rw`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[self.index(Coord::new(row, col))] {
                    None => write!(f, "--")?,
                    Some(p) => write!(f, "{}{}", p.kind.symbol(), p.player.symbol())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
