//! Chess board representation and game logic.
//!
//! An 8x8 grid of optional pieces plus the state that the rules need
//! (side to move, castling rights, en passant target, clocks). Supports the
//! full rules of chess including castling, en passant and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, GameStatus};
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod legality;
mod make_move;
mod movegen;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use state::Board;
pub use status::{DrawReason, GameStatus};
pub use types::{CastlingRights, Color, Move, Piece, PieceKind, Square};

pub use search::{
    evaluate, find_best_move, search, SearchLimits, SearchResult, SearchStats, MOBILITY_WEIGHT,
};

pub(crate) use types::PROMOTION_KINDS;
