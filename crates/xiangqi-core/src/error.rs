//! Error types for FEN parsing and position construction.
//!
//! Illegal moves are not errors: a rejected click returns the previous state.

use crate::position::Position;

/// Errors that occur when parsing a Xiangqi FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string has neither 2 nor 6 space-separated fields.
    #[error("expected 2 or 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 10 rows.
    #[error("expected 10 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 9 points.
    #[error("row {row} describes {length} points, expected 9")]
    BadRowLength {
        /// Zero-based row index (0 = Black's back rank).
        row: usize,
        /// Number of points described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w", "r" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// The parsed pieces do not form a valid board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a piece set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two pieces claim the same position.
    #[error("more than one piece on {position}")]
    OverlappingPieces {
        /// The contested position.
        position: Position,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError};
    use crate::position::Position;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRowCount { found: 8 };
        assert_eq!(format!("{err}"), "expected 10 rows in piece placement, found 8");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::OverlappingPieces {
            position: Position::new(4, 0).unwrap(),
        };
        assert_eq!(format!("{err}"), "more than one piece on 4,0");
    }

    #[test]
    fn fen_error_from_board_error() {
        let board_err = BoardError::OverlappingPieces {
            position: Position::new(0, 0).unwrap(),
        };
        let fen_err: FenError = board_err.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert!(std::error::Error::source(&fen_err).is_some());
    }
}
