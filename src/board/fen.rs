use std::str::FromStr;

use log::warn;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, PieceKind, Square};

impl Board {
    /// Parse a board position from a position string (FEN).
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// 0 and 1.
    pub fn from_position_string(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.put(Piece::new(kind, color, Square::at(row, col)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: col,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = CastlingRights::from_fen_field(parts[2])
            .map_err(|c| FenError::InvalidCastling { char: c })?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            field => Some(field.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: field.to_string(),
            })?),
        };

        let parse_clock = |field: &str| {
            field.parse::<u32>().map_err(|_| FenError::InvalidClock {
                found: field.to_string(),
            })
        };
        if let Some(field) = parts.get(4) {
            board.halfmove_clock = parse_clock(field)?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = parse_clock(field)?;
        }

        board.sync_moved_flags();
        Ok(board)
    }

    /// Render the position string handed to an external engine: placement
    /// from row 0 down, side to move, castling rights, en passant target,
    /// halfmove clock, fullmove number.
    #[must_use]
    pub fn to_position_string(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for cells in &self.grid {
            let mut row = String::new();
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move, or an error describing why the
    /// string cannot be played here.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_uci_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_uci_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: uci.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let Some(piece) = self.piece_at(from) else {
            return Err(MoveParseError::EmptySource {
                notation: uci.to_string(),
            });
        };

        let mv = self.normalize_move(Move {
            from,
            to,
            promotion,
        });
        if piece.color != self.side_to_move || !self.legal_moves_for(from).contains(&mv) {
            return Err(MoveParseError::Illegal {
                notation: uci.to_string(),
            });
        }
        Ok(mv)
    }

    /// Parse a UCI move and return the position after it, through the same
    /// path as any other move. The receiver is unchanged.
    pub fn apply_uci_move(&self, uci: &str) -> Result<Board, MoveParseError> {
        let mv = self.parse_uci_move(uci).inspect_err(|e| {
            warn!("rejected external move '{uci}': {e}");
        })?;
        self.apply_move(mv).map_err(|_| MoveParseError::Illegal {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and make it on this board in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// assert!(board.white_to_move());
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let next = self.apply_uci_move(uci)?;
        *self = next;
        self.last_move.ok_or_else(|| MoveParseError::Illegal {
            notation: uci.to_string(),
        })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_position_string(s)
    }
}
