//! Points each restricted piece kind may stand on.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::position::Position;

const fn mask(points: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    let mut i = 0;
    while i < points.len() {
        let (x, y) = points[i];
        if let Some(pos) = Position::new(x, y) {
            bb = bb.with(pos);
        }
        i += 1;
    }
    bb
}

const BLACK_GUARD: Bitboard = mask(&[(3, 0), (3, 2), (5, 0), (5, 2), (4, 1)]);
const RED_GUARD: Bitboard = mask(&[(3, 7), (3, 9), (5, 7), (5, 9), (4, 8)]);

const BLACK_ELEPHANT: Bitboard = mask(&[(0, 2), (2, 0), (2, 4), (4, 2), (6, 0), (6, 4), (8, 2)]);
const RED_ELEPHANT: Bitboard = mask(&[(0, 7), (2, 5), (2, 9), (4, 7), (6, 5), (6, 9), (8, 7)]);

/// The 3x3 palace: columns 3-5, rows 0-2 for Black and 7-9 for Red.
pub(super) fn general(color: Color, pos: Position) -> bool {
    let in_rows = match color {
        Color::Black => pos.y() <= 2,
        Color::Red => pos.y() >= 7,
    };
    (3..=5).contains(&pos.x()) && in_rows
}

/// The palace corners and center.
pub(super) fn guard(color: Color, pos: Position) -> bool {
    match color {
        Color::Black => BLACK_GUARD.contains(pos),
        Color::Red => RED_GUARD.contains(pos),
    }
}

/// The seven elephant points on the own side of the river.
pub(super) fn elephant(color: Color, pos: Position) -> bool {
    match color {
        Color::Black => BLACK_ELEPHANT.contains(pos),
        Color::Red => RED_ELEPHANT.contains(pos),
    }
}

/// Soldier points: never behind the starting row, and only the starting
/// columns until the river is crossed.
pub(super) fn soldier(color: Color, pos: Position) -> bool {
    let odd_column = pos.x() % 2 == 1;
    match color {
        Color::Black => !(pos.y() < 3 || (pos.y() < 5 && odd_column)),
        Color::Red => !(pos.y() > 6 || (pos.y() > 4 && odd_column)),
    }
}
