use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A board coordinate (or a coordinate delta), row-major orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// L∞ norm of a delta; king moves are exactly the non-zero deltas of norm 1.
    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.row.abs().max(self.col.abs())
    }

    /// True iff both components lie in `[0, size)`.
    #[inline]
    pub fn in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
