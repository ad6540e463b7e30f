use log::debug;

use super::error::MoveError;
use super::state::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use super::{Board, Color, Move, PieceKind, Square};

impl Board {
    /// Returns true if `mv` is a castle: the king moving two files.
    #[must_use]
    pub fn is_castling_move(&self, mv: &Move) -> bool {
        matches!(self.piece_at(mv.from), Some(p) if p.kind == PieceKind::King)
            && mv.from.col().abs_diff(mv.to.col()) == 2
    }

    /// Returns true if `mv` captures en passant.
    #[must_use]
    pub fn is_en_passant_move(&self, mv: &Move) -> bool {
        self.piece_at(mv.from)
            .is_some_and(|p| self.is_empty(mv.to) && self.en_passant_victim(&p, mv.to).is_some())
    }

    /// Fill in the default queen promotion for a pawn reaching the far row.
    pub(crate) fn normalize_move(&self, mv: Move) -> Move {
        match self.piece_at(mv.from) {
            Some(p)
                if p.kind == PieceKind::Pawn
                    && mv.to.row() == p.color.promotion_row()
                    && mv.promotion.is_none() =>
            {
                Move::with_promotion(mv.from, mv.to, PieceKind::Queen)
            }
            _ => mv,
        }
    }

    /// Validate `mv` against the legal moves and return the resulting position.
    ///
    /// The receiver is never modified. A pawn move onto the far row without a
    /// promotion choice promotes to a queen.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let piece = self
            .piece_at(mv.from)
            .ok_or(MoveError::NoPiece { square: mv.from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide { square: mv.from });
        }

        let mv = self.normalize_move(mv);
        if !self.legal_moves_for(mv.from).contains(&mv) {
            return Err(MoveError::Illegal { mv });
        }

        let mut next = self.clone();
        next.play_unchecked(mv);
        debug!("{} played {mv}", piece.color);
        Ok(next)
    }

    /// Apply a validated move to this board, replacing it with the successor.
    ///
    /// On error the board is left unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        *self = self.apply_move(mv)?;
        Ok(())
    }

    /// Apply a move without legality checks, with every side effect of real
    /// play: en-passant removal, castling rook relocation, promotion, and
    /// the castling/en-passant/clock bookkeeping.
    ///
    /// # Panics
    /// Panics if `mv.from` is empty.
    pub(crate) fn play_unchecked(&mut self, mv: Move) {
        let piece = self
            .take(mv.from)
            .expect("play_unchecked: source square is empty");
        let color = piece.color;
        let is_pawn = piece.kind == PieceKind::Pawn;

        let mut captured = self.take(mv.to);
        if is_pawn && captured.is_none() {
            if let Some(victim_sq) = self.en_passant_victim(&piece, mv.to) {
                captured = self.take(victim_sq);
            }
        }

        if piece.kind == PieceKind::King && mv.from.col().abs_diff(mv.to.col()) == 2 {
            let row = mv.from.row();
            let (rook_from, rook_to) = if mv.to.col() > mv.from.col() {
                (KINGSIDE_ROOK_COL, mv.to.col() - 1)
            } else {
                (QUEENSIDE_ROOK_COL, mv.to.col() + 1)
            };
            if let Some(rook) = self.take(Square::at(row, rook_from)) {
                self.put(rook.moved_to(Square::at(row, rook_to)));
            }
        }

        let mut moved = piece.moved_to(mv.to);
        if is_pawn && mv.to.row() == color.promotion_row() {
            let kind = mv
                .promotion
                .filter(|k| k.is_promotion_target())
                .unwrap_or(PieceKind::Queen);
            moved = moved.promoted(kind);
        }
        self.put(moved);

        if piece.kind == PieceKind::King {
            self.castling_rights.remove_color(color);
        }
        self.revoke_corner_rights(mv.from);
        self.revoke_corner_rights(mv.to);

        self.en_passant_target = if is_pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
            Some(Square::at((mv.from.row() + mv.to.row()) / 2, mv.from.col()))
        } else {
            None
        };

        if is_pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();
        self.last_move = Some(mv);
    }

    /// A move touching a rook's home corner ends castling on that side.
    fn revoke_corner_rights(&mut self, sq: Square) {
        for color in Color::BOTH {
            if sq.row() != color.back_row() {
                continue;
            }
            if sq.col() == KINGSIDE_ROOK_COL {
                self.castling_rights.remove(color, true);
            } else if sq.col() == QUEENSIDE_ROOK_COL {
                self.castling_rights.remove(color, false);
            }
        }
    }
}
