use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    pub(crate) fn slider_destinations(&self, piece: &Piece, slider: SliderType) -> Vec<Square> {
        let mut targets = Vec::with_capacity(14);
        for &(dr, dc) in slider.directions() {
            let mut cursor = piece.square.offset(dr, dc);
            while let Some(to) = cursor {
                match self.color_on(to) {
                    None => targets.push(to),
                    Some(color) => {
                        if color != piece.color {
                            targets.push(to);
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
        targets
    }

    /// First occupied square along a ray from `from`, excluding `from`.
    pub(crate) fn first_blocker(&self, from: Square, dr: isize, dc: isize) -> Option<Piece> {
        let mut cursor = from.offset(dr, dc);
        while let Some(sq) = cursor {
            if let Some(piece) = self.piece_at(sq) {
                return Some(piece);
            }
            cursor = sq.offset(dr, dc);
        }
        None
    }
}
