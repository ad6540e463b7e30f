use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Piece, Square};

impl Board {
    /// Single-step king destinations. Castling is added by
    /// `castling_destinations`.
    pub(crate) fn king_step_destinations(&self, king: &Piece) -> Vec<Square> {
        self.landable(king, &KING_TARGETS[king.square.index()])
    }
}
