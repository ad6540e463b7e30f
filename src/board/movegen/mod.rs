//! Pseudo-legal move generation.
//!
//! Destinations follow each piece's movement pattern and respect occupancy
//! (no landing on a friendly piece, no jumping except the knight) but do not
//! check whether the mover's king is left attacked. Castling is enumerated
//! separately by the game-state classifier.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::{Board, Piece, PieceKind, Square};

pub(crate) use sliders::SliderType;

impl Board {
    /// Pseudo-legal destinations for `piece`, in a fixed enumeration order.
    #[must_use]
    pub fn pseudo_destinations(&self, piece: &Piece) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(piece),
            PieceKind::Knight => self.knight_destinations(piece),
            PieceKind::Bishop => self.slider_destinations(piece, SliderType::Bishop),
            PieceKind::Rook => self.slider_destinations(piece, SliderType::Rook),
            PieceKind::Queen => self.slider_destinations(piece, SliderType::Queen),
            PieceKind::King => self.king_step_destinations(piece),
        }
    }

    /// Squares `piece` attacks, whoever occupies them.
    ///
    /// Pawns attack both forward diagonals and never the squares they push
    /// to. A sliding ray ends on the first occupied square it reaches.
    #[must_use]
    pub fn attacked_squares(&self, piece: &Piece) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => [-1, 1]
                .into_iter()
                .filter_map(|d_col| piece.square.offset(piece.color.pawn_direction(), d_col))
                .collect(),
            PieceKind::Knight => KNIGHT_TARGETS[piece.square.index()].clone(),
            PieceKind::King => KING_TARGETS[piece.square.index()].clone(),
            PieceKind::Bishop => self.ray_squares(piece.square, SliderType::Bishop),
            PieceKind::Rook => self.ray_squares(piece.square, SliderType::Rook),
            PieceKind::Queen => self.ray_squares(piece.square, SliderType::Queen),
        }
    }

    fn ray_squares(&self, from: Square, slider: SliderType) -> Vec<Square> {
        let mut squares = Vec::with_capacity(14);
        for &(dr, dc) in slider.directions() {
            let mut cursor = from.offset(dr, dc);
            while let Some(sq) = cursor {
                squares.push(sq);
                if !self.is_empty(sq) {
                    break;
                }
                cursor = sq.offset(dr, dc);
            }
        }
        squares
    }

    /// Keep the targets a piece may land on: empty or enemy-occupied.
    fn landable(&self, piece: &Piece, targets: &[Square]) -> Vec<Square> {
        targets
            .iter()
            .copied()
            .filter(|&to| self.color_on(to) != Some(piece.color))
            .collect()
    }
}
