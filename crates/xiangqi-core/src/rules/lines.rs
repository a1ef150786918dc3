//! Straight-line geometry shared by the chariot and the cannon.

use crate::bitboard::{Bitboard, between};
use crate::position::Position;

/// Return `true` if `from` and `to` are distinct and share a row or a column.
#[inline]
fn aligned(from: Position, to: Position) -> bool {
    from != to && (from.x() == to.x() || from.y() == to.y())
}

/// A straight move with nothing strictly between the endpoints.
pub(super) fn clear(from: Position, to: Position, occupied: Bitboard) -> bool {
    aligned(from, to) && (between(from, to) & occupied).is_empty()
}

/// A straight move over exactly one screen.
pub(super) fn screened(from: Position, to: Position, occupied: Bitboard) -> bool {
    aligned(from, to) && (between(from, to) & occupied).count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y).unwrap()
    }

    fn occupied(points: &[(i8, i8)]) -> Bitboard {
        points.iter().map(|&(x, y)| pos(x, y)).collect()
    }

    #[test]
    fn clear_ignores_endpoints() {
        let occ = occupied(&[(1, 2), (1, 9)]);
        assert!(clear(pos(1, 2), pos(1, 9), occ));
        assert!(!clear(pos(1, 2), pos(1, 9), occ.with(pos(1, 5))));
    }

    #[test]
    fn clear_requires_a_line() {
        assert!(!clear(pos(0, 0), pos(1, 1), Bitboard::EMPTY));
        assert!(!clear(pos(0, 0), pos(0, 0), Bitboard::EMPTY));
        assert!(clear(pos(0, 0), pos(8, 0), Bitboard::EMPTY));
    }

    #[test]
    fn screened_counts_exactly_one() {
        let base = occupied(&[(1, 2), (1, 9)]);
        assert!(!screened(pos(1, 2), pos(1, 9), base));
        let one = base.with(pos(1, 5));
        assert!(screened(pos(1, 2), pos(1, 9), one));
        assert!(!screened(pos(1, 2), pos(1, 9), one.with(pos(1, 7))));
        assert!(!screened(pos(1, 2), pos(3, 4), one));
    }
}
