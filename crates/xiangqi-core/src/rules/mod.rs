//! Move and capture legality.
//!
//! Single-ply geometry and blocking only: nothing here looks at whether a
//! general is left exposed.

mod lines;
mod region;
mod steps;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::state::GameState;

/// Return `true` if `piece` may move to `target` under the occupancy of `state`.
///
/// Occupancy of `target` itself is not considered; callers that need a quiet
/// move check it separately.
pub fn can_move(state: &GameState, piece: Piece, target: Position) -> bool {
    let from = piece.position();
    if from == target {
        return false;
    }
    let color = piece.color();
    let occupied = state.occupancy();

    match piece.kind() {
        PieceKind::General => region::general(color, target) && steps::general(from, target),
        PieceKind::Guard => region::guard(color, target) && steps::guard(from, target),
        PieceKind::Elephant => {
            region::elephant(color, target) && steps::elephant(from, target, occupied)
        }
        PieceKind::Horse => steps::horse(from, target, occupied),
        PieceKind::Chariot | PieceKind::Cannon => lines::clear(from, target, occupied),
        PieceKind::Soldier => region::soldier(color, target) && steps::soldier(color, from, target),
    }
}

/// Return `true` if `attacker` may capture `defender` in `state`.
///
/// The cannon needs exactly one screen; every other kind captures along its
/// ordinary move.
pub fn can_attack(state: &GameState, attacker: Piece, defender: Piece) -> bool {
    if attacker.color() == defender.color() {
        return false;
    }
    let target = defender.position();
    let occupied = state.occupancy();
    if !occupied.contains(target) {
        return false;
    }

    match attacker.kind() {
        PieceKind::Cannon => lines::screened(attacker.position(), target, occupied),
        _ => can_move(state, attacker, target),
    }
}
