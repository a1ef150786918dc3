//! Occupancy sets over the 90 board points, one bit per point.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::position::Position;

const MASK: u128 = (1u128 << Position::COUNT) - 1;

/// A set of board positions packed into a `u128` (bit = [`Position::index`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u128);

impl Bitboard {
    /// No positions set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 90 positions set.
    pub const FULL: Bitboard = Bitboard(MASK);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Count the number of set positions.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        (self.0 >> pos.index()) & 1 == 1
    }

    /// Return a new bitboard with `pos` set.
    #[inline]
    pub const fn with(self, pos: Position) -> Bitboard {
        Bitboard(self.0 | (1u128 << pos.index()))
    }

    /// Return a new bitboard with `pos` cleared.
    #[inline]
    pub const fn without(self, pos: Position) -> Bitboard {
        Bitboard(self.0 & !(1u128 << pos.index()))
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & MASK)
    }
}

impl FromIterator<Position> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

impl Iterator for Bitboard {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            None
        } else {
            let pos = Position::from_index(self.0.trailing_zeros() as usize);
            self.0 &= self.0 - 1;
            pos
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bitboard {}

/// Return the positions strictly between `a` and `b`.
///
/// Empty if the two positions do not share a row or a column, or are adjacent.
pub fn between(a: Position, b: Position) -> Bitboard {
    let (dx, dy) = (b.x() - a.x(), b.y() - a.y());
    if (dx != 0 && dy != 0) || (dx == 0 && dy == 0) {
        return Bitboard::EMPTY;
    }
    let (sx, sy) = (dx.signum(), dy.signum());
    let steps = dx.abs().max(dy.abs());
    (1..steps)
        .filter_map(|i| a.offset(sx * i, sy * i))
        .collect()
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for y in 0..Position::HEIGHT {
            write!(f, "  {y} ")?;
            for x in 0..Position::WIDTH {
                let set = Position::new(x, y).is_some_and(|pos| self.contains(pos));
                write!(f, "{} ", if set { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "    0 1 2 3 4 5 6 7 8")
    }
}
