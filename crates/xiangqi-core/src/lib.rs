//! Core Xiangqi types: board points, pieces, game state, move legality, and
//! the click-driven state machine.

mod bitboard;
mod color;
mod error;
mod fen;
mod piece;
mod piece_kind;
mod position;
mod rules;
mod state;
mod transition;

pub use bitboard::{Bitboard, between};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use rules::{can_attack, can_move};
pub use state::{GameState, PieceMarks, PrettyBoard};
pub use transition::{click, create_initial_state};
