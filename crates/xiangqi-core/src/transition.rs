//! State transitions: select, move, attack, and the click dispatcher.
//!
//! Every transition is copy-on-write: `self` is never modified. A transition
//! whose precondition fails returns an identical copy of the input state.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::piece::Piece;
use crate::position::Position;
use crate::rules;
use crate::state::GameState;

impl GameState {
    /// Select the piece on `position` and recompute the destination markers.
    ///
    /// Selecting an empty point clears the selection. The side to move is not
    /// checked here; [`click`](GameState::click) only selects own pieces.
    pub fn select(&self, position: Position) -> GameState {
        let selected = self.piece_at(position);
        let markers: BTreeSet<Position> = match selected {
            Some(piece) => Position::all()
                .filter(|&target| {
                    !self.occupied.contains(target) && rules::can_move(self, piece, target)
                })
                .collect(),
            None => BTreeSet::new(),
        };

        debug!(
            at = %position,
            piece = ?selected,
            markers = markers.len(),
            "select"
        );

        GameState {
            side_to_move: self.side_to_move,
            selected,
            pieces: self.pieces.clone(),
            markers,
            occupied: self.occupied,
        }
    }

    /// Move the selected piece to the empty point `position`.
    ///
    /// Requires a selection, an empty target, and a legal move; otherwise the
    /// state is returned unchanged. On success the side to move flips and the
    /// selection is cleared.
    pub fn move_to(&self, position: Position) -> GameState {
        let Some(mover) = self.selected else {
            trace!(to = %position, "move ignored: nothing selected");
            return self.clone();
        };
        if self.occupied.contains(position) || !rules::can_move(self, mover, position) {
            trace!(from = %mover.position(), to = %position, "move rejected");
            return self.clone();
        }

        let pieces = self
            .pieces
            .iter()
            .map(|&piece| relocate(piece, mover, position))
            .collect();

        debug!(
            side = mover.color().name(),
            from = %mover.position(),
            to = %position,
            "move"
        );
        GameState::idle(self.side_to_move.opponent(), pieces)
    }

    /// Capture the piece on `position` with the selected piece.
    ///
    /// Requires a selection, a defender on `position`, and a legal capture;
    /// otherwise the state is returned unchanged. On success the defender is
    /// removed, the side to move flips, and the selection is cleared.
    pub fn attack(&self, position: Position) -> GameState {
        let (Some(attacker), Some(defender)) = (self.selected, self.piece_at(position)) else {
            trace!(at = %position, "attack ignored: no attacker or no defender");
            return self.clone();
        };
        if !rules::can_attack(self, attacker, defender) {
            trace!(from = %attacker.position(), to = %position, "attack rejected");
            return self.clone();
        }

        let pieces = self
            .pieces
            .iter()
            .filter(|piece| piece.position() != position)
            .map(|&piece| relocate(piece, attacker, position))
            .collect();

        debug!(
            side = attacker.color().name(),
            from = %attacker.position(),
            to = %position,
            captured = ?defender.kind(),
            "capture"
        );
        GameState::idle(self.side_to_move.opponent(), pieces)
    }

    /// Apply a click on `position`, dispatching to the right transition.
    ///
    /// - An own piece is (re)selected.
    /// - With a selection, an opposing piece is attacked and an empty point is
    ///   moved to.
    /// - Without a selection, anything but an own piece is ignored.
    pub fn click(&self, position: Position) -> GameState {
        match (self.selected, self.piece_at(position)) {
            (_, Some(target)) if target.color() == self.side_to_move => self.select(position),
            (Some(_), Some(_)) => self.attack(position),
            (Some(_), None) => self.move_to(position),
            (None, _) => {
                trace!(at = %position, "click ignored");
                self.clone()
            }
        }
    }
}

fn relocate(piece: Piece, mover: Piece, to: Position) -> Piece {
    if piece.position() == mover.position() {
        piece.moved_to(to)
    } else {
        piece
    }
}

/// Return the standard starting state.
pub fn create_initial_state() -> GameState {
    GameState::new()
}

/// Apply a click on `position` to `state`.
pub fn click(position: Position, state: &GameState) -> GameState {
    state.click(position)
}
