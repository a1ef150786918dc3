//! The game state: pieces, side to move, selection, and destination markers.

use std::collections::BTreeSet;
use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rules;

/// Back rank of either side, column 0 to 8.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Guard,
    PieceKind::General,
    PieceKind::Guard,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// An immutable snapshot of a game.
///
/// Every transition ([`select`](GameState::select), [`move_to`](GameState::move_to),
/// [`attack`](GameState::attack), [`click`](GameState::click)) returns a new
/// snapshot and leaves `self` untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) side_to_move: Color,
    /// The selected piece. Always a copy of an entry in `pieces`.
    pub(crate) selected: Option<Piece>,
    /// Pieces in setup order; captures remove entries, moves update them in place.
    pub(crate) pieces: Vec<Piece>,
    /// Empty points the selected piece may move to. Empty when nothing is selected.
    pub(crate) markers: BTreeSet<Position>,
    /// Union of all piece positions, cached.
    pub(crate) occupied: Bitboard,
}

/// Presentation flags of a single piece, derived from the state it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceMarks {
    /// The piece is the selected one.
    pub selected: bool,
    /// The selected piece may capture this piece.
    pub attackable: bool,
}

impl GameState {
    /// Return the standard starting layout with Red to move.
    pub fn new() -> GameState {
        let pieces: Vec<Piece> = Position::all()
            .filter_map(|pos| {
                let (color, row) = if pos.y() <= 4 {
                    (Color::Black, pos.y())
                } else {
                    (Color::Red, Position::HEIGHT - 1 - pos.y())
                };
                let kind = match row {
                    0 => BACK_RANK[pos.x() as usize],
                    2 if pos.x() == 1 || pos.x() == 7 => PieceKind::Cannon,
                    3 if pos.x() % 2 == 0 => PieceKind::Soldier,
                    _ => return None,
                };
                Some(Piece::new(color, kind, pos))
            })
            .collect();
        GameState::idle(Color::Red, pieces)
    }

    /// Build an idle state from an arbitrary set of pieces.
    ///
    /// Fails if two pieces share a position.
    pub fn from_pieces(
        side_to_move: Color,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<GameState, BoardError> {
        let mut occupied = Bitboard::EMPTY;
        let mut collected = Vec::new();
        for piece in pieces {
            let position = piece.position();
            if occupied.contains(position) {
                return Err(BoardError::OverlappingPieces { position });
            }
            occupied = occupied.with(position);
            collected.push(piece);
        }
        Ok(GameState::idle(side_to_move, collected))
    }

    /// Assemble a state with no selection.
    pub(crate) fn idle(side_to_move: Color, pieces: Vec<Piece>) -> GameState {
        let occupied = pieces.iter().map(|piece| piece.position()).collect();
        GameState {
            side_to_move,
            selected: None,
            pieces,
            markers: BTreeSet::new(),
            occupied,
        }
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the selected piece, if any.
    #[inline]
    pub fn selected_piece(&self) -> Option<Piece> {
        self.selected
    }

    /// Return all pieces in setup order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Return the highlighted destination points, in index order.
    #[inline]
    pub fn destination_markers(&self) -> &BTreeSet<Position> {
        &self.markers
    }

    /// Return `true` if `position` carries a destination marker.
    #[inline]
    pub fn is_marker(&self, position: Position) -> bool {
        self.markers.contains(&position)
    }

    /// Return the occupied points.
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.occupied
    }

    /// Return the piece on `position`, if any.
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if !self.occupied.contains(position) {
            return None;
        }
        self.pieces
            .iter()
            .copied()
            .find(|piece| piece.position() == position)
    }

    /// Return the presentation flags of `piece` in this state.
    pub fn marks(&self, piece: &Piece) -> PieceMarks {
        match self.selected {
            Some(selected) => PieceMarks {
                selected: selected == *piece,
                attackable: rules::can_attack(self, selected, *piece),
            },
            None => PieceMarks::default(),
        }
    }

    /// Return a pretty-printable wrapper for this state.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("fen", &self.to_string())
            .field("selected", &self.selected)
            .field("markers", &self.markers)
            .finish()
    }
}

/// Wrapper for printing a state as a 9x10 grid of FEN letters, row 0 on top.
pub struct PrettyBoard<'a>(&'a GameState);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        for y in 0..Position::HEIGHT {
            write!(f, "{y}  ")?;
            for x in 0..Position::WIDTH {
                let c = Position::new(x, y)
                    .and_then(|pos| state.piece_at(pos))
                    .map_or('.', |piece| piece.fen_char());
                if x < Position::WIDTH - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7 8")
    }
}
