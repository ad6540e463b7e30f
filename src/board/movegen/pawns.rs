use super::super::{Board, Piece, PieceKind, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, pawn: &Piece) -> Vec<Square> {
        let mut targets = Vec::with_capacity(4);
        let dir = pawn.color.pawn_direction();
        let from = pawn.square;

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                targets.push(one);
                if from.row() == pawn.color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            targets.push(two);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(diag) = from.offset(dir, d_col) else {
                continue;
            };
            match self.piece_at(diag) {
                Some(target) => {
                    if target.color != pawn.color {
                        targets.push(diag);
                    }
                }
                None => {
                    if self.en_passant_victim(pawn, diag).is_some() {
                        targets.push(diag);
                    }
                }
            }
        }

        targets
    }

    /// Square of the pawn captured en passant if `pawn` moves to `to`.
    ///
    /// Requires `to` to be the board's en-passant target and an enemy pawn
    /// to stand beside the mover on the target's file.
    pub(crate) fn en_passant_victim(&self, pawn: &Piece, to: Square) -> Option<Square> {
        if pawn.kind != PieceKind::Pawn || self.en_passant_target != Some(to) {
            return None;
        }
        let d_row = to.row() as isize - pawn.square.row() as isize;
        if to.col() == pawn.square.col() || d_row != pawn.color.pawn_direction() {
            return None;
        }
        let flank = Square::new(pawn.square.row(), to.col())?;
        match self.piece_at(flank) {
            Some(victim) if victim.kind == PieceKind::Pawn && victim.color != pawn.color => {
                Some(flank)
            }
            _ => None,
        }
    }
}
