//! Game-state classification: attacks, check, checkmate, stalemate,
//! castling eligibility and draw conditions.

use std::fmt;

use super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::state::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use super::{Board, Color, Piece, PieceKind, Square};

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    /// Returns true when no further play is possible.
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(DrawReason::FiftyMoveRule) => write!(f, "draw by fifty-move rule"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
        }
    }
}

impl Board {
    /// Square of `color`'s king, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// Returns true if any piece of `by` attacks `target`.
    ///
    /// Works backwards from the target with the same patterns the move
    /// generator uses, so it never consults the legality filter. Pawns attack
    /// their forward diagonals whether or not those squares are occupied.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let is_attacker = |sq: Square, kinds: &[PieceKind]| {
            self.piece_at(sq)
                .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
        };

        let back = -by.pawn_direction();
        if [-1, 1]
            .into_iter()
            .filter_map(|d_col| target.offset(back, d_col))
            .any(|sq| is_attacker(sq, &[PieceKind::Pawn]))
        {
            return true;
        }

        if KNIGHT_TARGETS[target.index()]
            .iter()
            .any(|&sq| is_attacker(sq, &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_TARGETS[target.index()]
            .iter()
            .any(|&sq| is_attacker(sq, &[PieceKind::King]))
        {
            return true;
        }

        let slides = |dirs: &[(isize, isize)], kinds: &[PieceKind]| {
            dirs.iter().any(|&(dr, dc)| {
                self.first_blocker(target, dr, dc)
                    .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
            })
        };
        slides(&ROOK_DIRECTIONS, &[PieceKind::Rook, PieceKind::Queen])
            || slides(&BISHOP_DIRECTIONS, &[PieceKind::Bishop, PieceKind::Queen])
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A color with no pieces at all is never in check.
    ///
    /// # Panics
    /// Panics if `color` has pieces but no king: the position is corrupt and
    /// any answer would misreport the game.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None if self.pieces(color).next().is_none() => false,
            None => panic!("board invariant violated: {color} has pieces but no king"),
        }
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `king` may castle with `rook`.
    ///
    /// Both must be unmoved pieces of one color standing on this board, all
    /// squares strictly between them empty, and none of the squares the king
    /// occupies or crosses (start, middle, end) attacked by the opponent.
    #[must_use]
    pub fn can_castle(&self, king: &Piece, rook: &Piece) -> bool {
        if king.kind != PieceKind::King
            || rook.kind != PieceKind::Rook
            || king.has_moved
            || rook.has_moved
            || king.color != rook.color
            || king.square.row() != rook.square.row()
        {
            return false;
        }
        if self.piece_at(king.square) != Some(*king) || self.piece_at(rook.square) != Some(*rook) {
            return false;
        }

        let row = king.square.row();
        let (king_col, rook_col) = (king.square.col(), rook.square.col());
        let (low, high) = (king_col.min(rook_col), king_col.max(rook_col));
        if (low + 1..high).any(|col| !self.is_empty(Square::at(row, col))) {
            return false;
        }

        let step = if rook_col > king_col { 1 } else { -1 };
        let enemy = king.color.opponent();
        (0..=2).all(|i| {
            king.square
                .offset(0, step * i)
                .is_some_and(|sq| !self.is_square_attacked(sq, enemy))
        })
    }

    /// Castling targets for `king`: king side first, then queen side.
    #[must_use]
    pub fn castling_destinations(&self, king: &Piece) -> Vec<Square> {
        let row = king.square.row();
        let mut targets = Vec::with_capacity(2);
        for (rook_col, step) in [(KINGSIDE_ROOK_COL, 2), (QUEENSIDE_ROOK_COL, -2)] {
            let Some(rook) = self.piece_at(Square::at(row, rook_col)) else {
                continue;
            };
            if self.can_castle(king, &rook) {
                if let Some(to) = king.square.offset(0, step) {
                    targets.push(to);
                }
            }
        }
        targets
    }

    /// Classify the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.side_to_move;
        let in_check = self.is_in_check(color);
        let can_move = self.has_legal_move(color);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            _ if self.is_fifty_move_draw() => GameStatus::Draw(DrawReason::FiftyMoveRule),
            _ if self.is_insufficient_material() => {
                GameStatus::Draw(DrawReason::InsufficientMaterial)
            }
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// One hundred half-moves without a pawn move or capture.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or only bishops that all stand on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishop_shades = Vec::new();
        for piece in Color::BOTH.iter().flat_map(|&c| self.pieces(c)) {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    bishop_shades.push((piece.square.row() + piece.square.col()) % 2);
                }
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        match (knights, bishop_shades.len()) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, _) => bishop_shades.windows(2).all(|w| w[0] == w[1]),
            _ => false,
        }
    }
}
