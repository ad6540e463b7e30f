use super::{CastlingRights, Color, Move, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on, and the columns of the two castling rooks.
pub(crate) const KING_HOME_COL: usize = 4;
pub(crate) const KINGSIDE_ROOK_COL: usize = 7;
pub(crate) const QUEENSIDE_ROOK_COL: usize = 0;

/// A full game position.
///
/// The grid is the only place pieces live; every occupied cell holds a
/// `Piece` whose `square` is that cell. Cloning yields an independent
/// position, which is what the legality filter and the search rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) last_move: Option<Move>,
}

impl Board {
    /// The standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.put(Piece::new(kind, Color::Black, Square::at(0, col)));
            board.put(Piece::new(PieceKind::Pawn, Color::Black, Square::at(1, col)));
            board.put(Piece::new(PieceKind::Pawn, Color::White, Square::at(6, col)));
            board.put(Piece::new(kind, Color::White, Square::at(7, col)));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Write a piece to the cell named by its own `square` field.
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.grid[piece.square.row()][piece.square.col()] = Some(piece);
    }

    /// Clear a cell, returning what stood there.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.row()][sq.col()].take()
    }

    /// Pieces of `color` in row-major square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.grid
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .filter(move |p| p.color == color)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The move that produced this position, if it was reached by play.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Derive `has_moved` for kings and rooks from the castling rights.
    ///
    /// Positions loaded from text or assembled by hand carry no history, so
    /// a king or corner rook counts as unmoved exactly when a matching right
    /// is still present. Pawns count as unmoved on their start row.
    pub(crate) fn sync_moved_flags(&mut self) {
        let rights = self.castling_rights;
        for cell in self.grid.iter_mut().flatten() {
            let Some(piece) = cell.as_mut() else {
                continue;
            };
            let sq = piece.square;
            let home_row = sq.row() == piece.color.back_row();
            piece.has_moved = match piece.kind {
                PieceKind::King => {
                    !(home_row
                        && sq.col() == KING_HOME_COL
                        && (rights.has(piece.color, true) || rights.has(piece.color, false)))
                }
                PieceKind::Rook => {
                    let kingside = home_row
                        && sq.col() == KINGSIDE_ROOK_COL
                        && rights.has(piece.color, true);
                    let queenside = home_row
                        && sq.col() == QUEENSIDE_ROOK_COL
                        && rights.has(piece.color, false);
                    !(kingside || queenside)
                }
                PieceKind::Pawn => sq.row() != piece.color.pawn_start_row(),
                _ => false,
            };
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
