//! Board coordinates.

use std::fmt;
use std::str::FromStr;

/// A point on the 9x10 board.
///
/// `x` is the column (0-8), `y` the row (0-9). Row 0 is Black's back rank,
/// row 9 is Red's. Index = y * 9 + x.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    // Field order gives row-major ordering, matching `index`.
    y: i8,
    x: i8,
}

impl Position {
    /// Number of columns.
    pub const WIDTH: i8 = 9;
    /// Number of rows.
    pub const HEIGHT: i8 = 10;
    /// Total number of points.
    pub const COUNT: usize = 90;

    /// Create a position, returning `None` if it lies off the board.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Option<Position> {
        if x >= 0 && x < Self::WIDTH && y >= 0 && y < Self::HEIGHT {
            Some(Position { x, y })
        } else {
            None
        }
    }

    /// Create a position from its index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Position> {
        if index < Self::COUNT {
            Some(Position {
                x: (index % 9) as i8,
                y: (index / 9) as i8,
            })
        } else {
            None
        }
    }

    /// Return the column.
    #[inline]
    pub const fn x(self) -> i8 {
        self.x
    }

    /// Return the row.
    #[inline]
    pub const fn y(self) -> i8 {
        self.y
    }

    /// Return the zero-based index (0..90).
    #[inline]
    pub const fn index(self) -> usize {
        (self.y * Self::WIDTH + self.x) as usize
    }

    /// Return the position shifted by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Position> {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Iterate over all 90 positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT).filter_map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}

impl FromStr for Position {
    type Err = ();

    /// Parse `x,y`.
    fn from_str(s: &str) -> Result<Position, ()> {
        let (x, y) = s.split_once(',').ok_or(())?;
        let x = x.trim().parse::<i8>().map_err(|_| ())?;
        let y = y.trim().parse::<i8>().map_err(|_| ())?;
        Position::new(x, y).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn new_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(8, 9).is_some());
        assert!(Position::new(9, 0).is_none());
        assert!(Position::new(0, 10).is_none());
        assert!(Position::new(-1, 3).is_none());
    }

    #[test]
    fn index_roundtrip() {
        for pos in Position::all() {
            assert_eq!(Position::from_index(pos.index()), Some(pos));
        }
        assert!(Position::from_index(90).is_none());
    }

    #[test]
    fn all_in_index_order() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), Position::COUNT);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[9], Position::new(0, 1).unwrap());
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.offset(1, 2), Position::new(1, 2));
        assert_eq!(corner.offset(-1, 0), None);
    }

    #[test]
    fn display_and_parse() {
        let pos = Position::new(4, 7).unwrap();
        assert_eq!(format!("{pos}"), "4,7");
        assert_eq!(format!("{pos:?}"), "Position(4,7)");
        assert_eq!("4,7".parse::<Position>(), Ok(pos));
        assert_eq!(" 4 , 7 ".trim().parse::<Position>(), Ok(pos));
        assert!("9,0".parse::<Position>().is_err());
        assert!("47".parse::<Position>().is_err());
    }
}
