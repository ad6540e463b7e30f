//! Static evaluation.

use super::pst::square_bonus;
use crate::board::{Board, Color};

/// Centipawns credited per legal move of mobility advantage.
pub const MOBILITY_WEIGHT: i32 = 5;

/// Score `board` from White's point of view: positive favours White.
///
/// Sums material and piece-square bonuses for every piece (subtracting
/// Black's), then adds `MOBILITY_WEIGHT` times the difference between
/// White's and Black's legal move counts.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for color in Color::BOTH {
        let side: i32 = board
            .pieces(color)
            .map(|piece| piece.kind.value() + square_bonus(&piece))
            .sum();
        score += color.sign() * side;
    }

    let mobility = count(board, Color::White) - count(board, Color::Black);
    score + MOBILITY_WEIGHT * mobility
}

fn count(board: &Board, color: Color) -> i32 {
    i32::try_from(board.legal_move_count(color)).unwrap_or(i32::MAX)
}
