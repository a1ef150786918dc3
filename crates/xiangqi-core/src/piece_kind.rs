//! Xiangqi piece kinds.

use std::fmt;

/// The kind of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    General,
    Chariot,
    Cannon,
    Horse,
    Elephant,
    Guard,
    Soldier,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 7;

    /// All piece kinds, heaviest first.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Horse,
        PieceKind::Elephant,
        PieceKind::Guard,
        PieceKind::Soldier,
    ];

    /// Relative weight of the kind.
    ///
    /// Only used to pick display glyphs; it has no effect on the rules.
    #[inline]
    pub const fn weight(self) -> u8 {
        match self {
            PieceKind::General => 100,
            PieceKind::Chariot => 50,
            PieceKind::Cannon => 30,
            PieceKind::Horse => 29,
            PieceKind::Elephant => 16,
            PieceKind::Guard => 10,
            PieceKind::Soldier => 1,
        }
    }

    /// Recover a kind from its weight.
    pub fn from_weight(weight: u8) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|kind| kind.weight() == weight)
    }

    /// Return the FEN letter for this kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::General => 'k',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Horse => 'n',
            PieceKind::Elephant => 'b',
            PieceKind::Guard => 'a',
            PieceKind::Soldier => 'p',
        }
    }

    /// Parse a FEN letter (case-insensitive). `h` and `e` are accepted as
    /// aliases for the horse and the elephant.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::General),
            'r' => Some(PieceKind::Chariot),
            'c' => Some(PieceKind::Cannon),
            'n' | 'h' => Some(PieceKind::Horse),
            'b' | 'e' => Some(PieceKind::Elephant),
            'a' => Some(PieceKind::Guard),
            'p' => Some(PieceKind::Soldier),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
