//! Legality filter.
//!
//! A pseudo-legal move is legal iff, once applied exactly as in real play,
//! the mover's own king is not attacked. Every move surfaced to a caller
//! (UI, search, classifier, external engine input) passes through here.

use super::{Board, Color, Move, Piece, PieceKind, Square, PROMOTION_KINDS};

impl Board {
    /// Returns true if `piece` can move to `to` and doing so leaves its own
    /// king safe.
    ///
    /// `piece` must stand on its `square` in this board, and `to` must be one
    /// of its pseudo-legal or castling destinations; otherwise the move is
    /// reported illegal.
    #[must_use]
    pub fn is_legal_destination(&self, piece: &Piece, to: Square) -> bool {
        let on_board = match self.piece_at(piece.square) {
            Some(p) if p.kind == piece.kind && p.color == piece.color => p,
            _ => return false,
        };
        let reachable = self.pseudo_destinations(&on_board).contains(&to)
            || (on_board.kind == PieceKind::King
                && self.castling_destinations(&on_board).contains(&to));
        reachable && self.leaves_king_safe(&on_board, to)
    }

    /// Play `piece` to `to` on a copy and check the mover's king. `to` must
    /// already be a destination the piece can reach.
    fn leaves_king_safe(&self, piece: &Piece, to: Square) -> bool {
        let mut next = self.clone();
        next.play_unchecked(Move::new(piece.square, to));
        !next.is_in_check(piece.color)
    }

    /// Legal destination squares for the piece on `square`, castling
    /// included for an eligible king. Empty if the square is empty.
    #[must_use]
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(square) else {
            return Vec::new();
        };
        let mut destinations: Vec<Square> = self
            .pseudo_destinations(&piece)
            .into_iter()
            .filter(|&to| self.leaves_king_safe(&piece, to))
            .collect();
        if piece.kind == PieceKind::King {
            destinations.extend(
                self.castling_destinations(&piece)
                    .into_iter()
                    .filter(|&to| self.leaves_king_safe(&piece, to)),
            );
        }
        destinations
    }

    /// Legal moves for the piece on `square`, one per promotion choice when
    /// a pawn reaches the far row.
    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(square) else {
            return Vec::new();
        };
        let promotes = |to: Square| {
            piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
        };

        let mut moves = Vec::new();
        for to in self.legal_destinations(square) {
            if promotes(to) {
                moves.extend(
                    PROMOTION_KINDS
                        .iter()
                        .map(|&kind| Move::with_promotion(square, to, kind)),
                );
            } else {
                moves.push(Move::new(square, to));
            }
        }
        moves
    }

    /// All legal moves for the side to move, in row-major piece order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.pieces(self.side_to_move)
            .flat_map(|piece| self.legal_moves_for(piece.square))
            .collect()
    }

    /// Returns true if `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color).any(|piece| {
            self.pseudo_destinations(&piece)
                .into_iter()
                .any(|to| self.leaves_king_safe(&piece, to))
                || (piece.kind == PieceKind::King
                    && self
                        .castling_destinations(&piece)
                        .into_iter()
                        .any(|to| self.leaves_king_safe(&piece, to)))
        })
    }

    /// Number of legal moves available to `color`, regardless of whose turn
    /// it is. Promotions count once per choice.
    #[must_use]
    pub fn legal_move_count(&self, color: Color) -> usize {
        if color == self.side_to_move {
            return self.legal_moves().len();
        }
        self.with_side_to_move(color).legal_moves().len()
    }

    /// A copy of this position with `color` to move. Handing the turn over
    /// outside of play voids any en passant opportunity.
    pub(crate) fn with_side_to_move(&self, color: Color) -> Board {
        let mut turned = self.clone();
        if color != self.side_to_move {
            turned.side_to_move = color;
            turned.en_passant_target = None;
        }
        turned
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| {
                let mut next = self.clone();
                next.play_unchecked(mv);
                next.perft(depth - 1)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Move, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // Bishop on e2 pinned to the king on e1 by the rook on e8
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e2"), Color::White, PieceKind::Bishop)
            .piece(sq("e8"), Color::Black, PieceKind::Rook)
            .piece(sq("a8"), Color::Black, PieceKind::King)
            .build();
        let bishop = board.piece_at(sq("e2")).unwrap();
        assert!(!board.pseudo_destinations(&bishop).is_empty());
        assert!(board.legal_destinations(sq("e2")).is_empty());
    }

    #[test]
    fn test_unreachable_destination_is_not_legal() {
        let board = Board::new();
        let knight = board.piece_at(sq("g1")).unwrap();
        assert!(board.is_legal_destination(&knight, sq("f3")));
        assert!(!board.is_legal_destination(&knight, sq("g5")));

        // Castle-shaped king step with the bishop still on f1
        let king = board.piece_at(sq("e1")).unwrap();
        assert!(!board.is_legal_destination(&king, sq("g1")));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("d8"), Color::Black, PieceKind::Rook)
            .piece(sq("a8"), Color::Black, PieceKind::King)
            .build();
        let dests = board.legal_destinations(sq("e1"));
        assert!(!dests.contains(&sq("d1")));
        assert!(!dests.contains(&sq("d2")));
        assert!(dests.contains(&sq("f1")));
    }

    #[test]
    fn test_check_must_be_answered() {
        // White king on e1 checked by queen on e4; only moves that resolve it
        let board = Board::from_position_string("4k3/8/8/8/4q3/8/3N4/4K3 w - - 0 1").unwrap();
        let moves = board.legal_moves();
        assert!(!moves.is_empty());
        for mv in &moves {
            let next = board.apply_move(*mv).unwrap();
            assert!(!next.is_in_check(Color::White), "{mv} leaves king in check");
        }
        assert!(!moves.contains(&Move::new(sq("d2"), sq("b3"))));
    }

    #[test]
    fn test_promotion_expands_to_four_moves() {
        let board = Board::from_position_string("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let promotions: Vec<_> = board
            .legal_moves_for(sq("a7"))
            .into_iter()
            .filter_map(|m| m.promotion())
            .collect();
        assert_eq!(
            promotions,
            vec![
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight
            ]
        );
    }

    #[test]
    fn test_empty_square_has_no_destinations() {
        let board = Board::new();
        assert!(board.legal_destinations(sq("e4")).is_empty());
        assert!(board.legal_moves_for(sq("e4")).is_empty());
    }

    #[test]
    fn test_legal_move_count_for_either_side() {
        let board = Board::new();
        assert_eq!(board.legal_move_count(Color::White), 20);
        assert_eq!(board.legal_move_count(Color::Black), 20);
    }
}
