//! A colored piece standing on the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A piece on the board.
///
/// Selection and capture highlighting are not stored here; they are derived
/// from the owning [`GameState`](crate::GameState) through
/// [`GameState::marks`](crate::GameState::marks).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    position: Position,
}

impl Piece {
    /// Create a piece.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, position: Position) -> Piece {
        Piece {
            color,
            kind,
            position,
        }
    }

    /// Parse a FEN letter into a piece standing on `position`.
    ///
    /// Uppercase letters produce Red pieces; lowercase letters produce Black pieces.
    pub fn from_fen_char(c: char, position: Position) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind, position))
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Return the same piece relocated to `position`.
    #[inline]
    pub const fn moved_to(self, position: Position) -> Piece {
        Piece { position, ..self }
    }

    /// Return the FEN letter: uppercase for Red, lowercase for Black.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::Red => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.fen_char(), self.position)
    }
}
