//! Text rendering of a game state.

use std::fmt;

use xiangqi_core::{Color, GameState, Piece, Position};

/// Which characters represent pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Traditional characters, two columns wide.
    #[default]
    Chinese,
    /// FEN letters.
    Ascii,
}

/// Glyphs keyed by piece weight.
const RED_GLYPHS: [(u8, char); 7] = [
    (100, '帅'),
    (50, '俥'),
    (30, '炮'),
    (29, '傌'),
    (16, '相'),
    (10, '仕'),
    (1, '兵'),
];

const BLACK_GLYPHS: [(u8, char); 7] = [
    (100, '将'),
    (50, '车'),
    (30, '砲'),
    (29, '马'),
    (16, '象'),
    (10, '士'),
    (1, '卒'),
];

/// Return the character drawn for `piece`.
pub fn glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Ascii => piece.fen_char(),
        GlyphStyle::Chinese => {
            let table = match piece.color() {
                Color::Red => &RED_GLYPHS,
                Color::Black => &BLACK_GLYPHS,
            };
            let weight = piece.kind().weight();
            table
                .iter()
                .find(|(w, _)| *w == weight)
                .map_or('?', |&(_, c)| c)
        }
    }
}

/// A renderable view of a state, with an optional cursor.
pub struct BoardView<'a> {
    pub state: &'a GameState,
    pub cursor: Option<Position>,
    pub style: GlyphStyle,
    pub coords: bool,
}

impl BoardView<'_> {
    fn empty_glyph(&self) -> char {
        match self.style {
            GlyphStyle::Chinese => '十',
            GlyphStyle::Ascii => '.',
        }
    }

    fn marker_glyph(&self) -> char {
        match self.style {
            GlyphStyle::Chinese => '○',
            GlyphStyle::Ascii => '+',
        }
    }

    fn river(&self) -> &'static str {
        match self.style {
            GlyphStyle::Chinese => " ～  楚  河  ～  ～  ～  汉  界  ～",
            GlyphStyle::Ascii => "  ~  ~  ~  ~ river ~  ~  ~  ~",
        }
    }

    fn cell_width(&self) -> usize {
        match self.style {
            GlyphStyle::Chinese => 4,
            GlyphStyle::Ascii => 3,
        }
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, pos: Position) -> fmt::Result {
        let state = self.state;
        let (open, body, close) = match state.piece_at(pos) {
            Some(piece) => {
                let marks = state.marks(&piece);
                let c = glyph(piece, self.style);
                if marks.selected {
                    ('[', c, ']')
                } else if marks.attackable {
                    ('(', c, ')')
                } else if self.cursor == Some(pos) {
                    ('<', c, '>')
                } else {
                    (' ', c, ' ')
                }
            }
            None => {
                let c = if state.is_marker(pos) {
                    self.marker_glyph()
                } else {
                    self.empty_glyph()
                };
                if self.cursor == Some(pos) {
                    ('<', c, '>')
                } else {
                    (' ', c, ' ')
                }
            }
        };
        write!(f, "{open}{body}{close}")
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "side to move: {}", self.state.side_to_move().name())?;
        for y in 0..Position::HEIGHT {
            if self.coords {
                write!(f, "{y} ")?;
            }
            for x in 0..Position::WIDTH {
                if let Some(pos) = Position::new(x, y) {
                    self.write_cell(f, pos)?;
                }
            }
            writeln!(f)?;
            if y == 4 {
                if self.coords {
                    write!(f, "  ")?;
                }
                writeln!(f, "{}", self.river())?;
            }
        }
        if self.coords {
            write!(f, "  ")?;
            for x in 0..Position::WIDTH {
                write!(f, "{:^width$}", x, width = self.cell_width())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
