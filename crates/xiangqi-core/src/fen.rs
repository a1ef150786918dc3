//! Xiangqi FEN parsing and serialization for [`GameState`].
//!
//! Only the placement and the side to move are meaningful. The four trailing
//! fields of the long form are accepted and ignored; the selection is never
//! encoded.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::state::GameState;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 2 && fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != Position::HEIGHT as usize {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut pieces = Vec::new();
        for (row, row_str) in rows.iter().enumerate() {
            let mut x: usize = 0;
            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=9).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    x += digit as usize;
                    continue;
                }

                let position = Position::new(x as i8, row as i8).ok_or(FenError::BadRowLength {
                    row,
                    length: x + 1,
                })?;
                let piece = Piece::from_fen_char(c, position)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                pieces.push(piece);
                x += 1;
            }

            if x != Position::WIDTH as usize {
                return Err(FenError::BadRowLength { row, length: x });
            }
        }

        let side_to_move = match fields[1] {
            "w" | "r" => Color::Red,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        Ok(GameState::from_pieces(side_to_move, pieces)?)
    }
}

impl GameState {
    /// Return the placement and side to move as a FEN string.
    pub fn fen(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..Position::HEIGHT {
            let mut empty = 0;
            for x in 0..Position::WIDTH {
                match Position::new(x, y).and_then(|pos| self.piece_at(pos)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if y < Position::HEIGHT - 1 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::color::Color;
    use crate::error::{BoardError, FenError};
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::state::GameState;

    #[test]
    fn starting_fen_matches_new() {
        let parsed: GameState = STARTING_FEN.parse().unwrap();
        let built = GameState::new();
        assert_eq!(parsed.fen(), built.fen());
        assert_eq!(parsed.side_to_move(), Color::Red);
        assert_eq!(parsed.pieces().len(), 32);
    }

    #[test]
    fn display_is_short_form() {
        assert_eq!(
            GameState::new().to_string(),
            "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w"
        );
    }

    #[test]
    fn short_form_and_aliases() {
        let state: GameState = "4k4/9/9/9/9/9/9/9/9/3HE4 b".parse().unwrap();
        assert_eq!(state.side_to_move(), Color::Black);
        let horse = state.piece_at(Position::new(3, 9).unwrap()).unwrap();
        assert_eq!(horse.kind(), PieceKind::Horse);
        assert_eq!(horse.color(), Color::Red);
        let elephant = state.piece_at(Position::new(4, 9).unwrap()).unwrap();
        assert_eq!(elephant.kind(), PieceKind::Elephant);
        assert_eq!(state.to_string(), "4k4/9/9/9/9/9/9/9/9/3NB4 b");
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            "9/9/9/9/9/9/9/9/9/9".parse::<GameState>(),
            Err(FenError::WrongFieldCount { found: 1 })
        );
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            "9/9/9 w".parse::<GameState>(),
            Err(FenError::WrongRowCount { found: 3 })
        );
    }

    #[test]
    fn bad_row_length() {
        assert_eq!(
            "8/9/9/9/9/9/9/9/9/9 w".parse::<GameState>(),
            Err(FenError::BadRowLength { row: 0, length: 8 })
        );
        assert_eq!(
            "9/9/9/9/9/9/9/9/9/9k w".parse::<GameState>(),
            Err(FenError::BadRowLength { row: 9, length: 10 })
        );
    }

    #[test]
    fn invalid_piece_char() {
        assert_eq!(
            "9/9/9/9/9/9/9/9/9/8x w".parse::<GameState>(),
            Err(FenError::InvalidPieceChar { character: 'x' })
        );
        assert_eq!(
            "9/9/9/9/9/9/9/9/9/0 w".parse::<GameState>(),
            Err(FenError::InvalidPieceChar { character: '0' })
        );
    }

    #[test]
    fn invalid_side() {
        assert_eq!(
            "9/9/9/9/9/9/9/9/9/9 x".parse::<GameState>(),
            Err(FenError::InvalidColor {
                found: "x".to_string()
            })
        );
    }

    #[test]
    fn board_errors_are_wrapped() {
        let err = FenError::from(BoardError::OverlappingPieces {
            position: Position::new(0, 0).unwrap(),
        });
        assert!(format!("{err}").starts_with("invalid board"));
    }
}
