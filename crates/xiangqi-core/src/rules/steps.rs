//! Short-range step geometry: general, guard, elephant, horse, soldier.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::position::Position;

#[inline]
fn delta(from: Position, to: Position) -> (i8, i8) {
    (to.x() - from.x(), to.y() - from.y())
}

/// One point orthogonally.
pub(super) fn general(from: Position, to: Position) -> bool {
    let (dx, dy) = delta(from, to);
    dx.abs() + dy.abs() == 1
}

/// One point diagonally.
pub(super) fn guard(from: Position, to: Position) -> bool {
    let (dx, dy) = delta(from, to);
    dx * dx + dy * dy == 2
}

/// Two points diagonally, through an empty eye.
pub(super) fn elephant(from: Position, to: Position, occupied: Bitboard) -> bool {
    let (dx, dy) = delta(from, to);
    if dx.abs() != 2 || dy.abs() != 2 {
        return false;
    }
    from.offset(dx / 2, dy / 2)
        .is_some_and(|eye| !occupied.contains(eye))
}

/// An L-shape whose leg is empty.
///
/// The leg is the point one step from `from` along the long side of the L;
/// halving the delta with truncation toward zero finds it.
pub(super) fn horse(from: Position, to: Position, occupied: Bitboard) -> bool {
    let (dx, dy) = delta(from, to);
    if dx * dx + dy * dy != 5 {
        return false;
    }
    from.offset(dx / 2, dy / 2)
        .is_some_and(|leg| !occupied.contains(leg))
}

/// One point orthogonally, never backwards.
pub(super) fn soldier(color: Color, from: Position, to: Position) -> bool {
    let (dx, dy) = delta(from, to);
    dy * color.forward() >= 0 && dx.abs() + dy.abs() == 1
}
