use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, knight: &Piece) -> Vec<Square> {
        self.landable(knight, &KNIGHT_TARGETS[knight.square.index()])
    }
}
