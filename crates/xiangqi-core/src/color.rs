//! Side colors.

use std::fmt;
use std::ops::Not;

/// One of the two sides. Red moves first and starts on rows 5-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors, Red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Return the opposing side.
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row step a soldier of this side takes when advancing.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Return the lowercase name used in rendered output.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}
