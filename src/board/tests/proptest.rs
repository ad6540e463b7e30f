//! Property-based tests using proptest.

use crate::board::{Board, Color, Square};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position,
/// calling `check` on every position reached.
fn random_playout<F>(seed: u64, num_moves: usize, mut check: F) -> Result<(), TestCaseError>
where
    F: FnMut(&Board) -> Result<(), TestCaseError>,
{
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv).map_err(|e| TestCaseError::fail(e.to_string()))?;
        check(&board)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            let mover = board.side_to_move();
            for mv in board.legal_moves() {
                let next = board.apply_move(mv).map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert!(!next.is_in_check(mover), "{} exposes the king", mv);
            }
            Ok(())
        })?;
    }

    /// Property: the position string survives a parse round trip
    #[test]
    fn prop_position_string_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            let fen = board.to_position_string();
            let parsed = Board::from_position_string(&fen)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(parsed.to_position_string(), fen);
            prop_assert_eq!(parsed.legal_moves(), board.legal_moves());
            Ok(())
        })?;
    }

    /// Property: checkmate and stalemate never hold at once
    #[test]
    fn prop_mate_and_stalemate_exclusive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            for color in Color::BOTH {
                prop_assert!(!(board.is_checkmate(color) && board.is_stalemate(color)));
            }
            Ok(())
        })?;
    }

    /// Property: every piece records the square it stands on
    #[test]
    fn prop_piece_squares_match_cells(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |board| {
            for sq in Square::all() {
                if let Some(piece) = board.piece_at(sq) {
                    prop_assert_eq!(piece.square, sq);
                }
            }
            prop_assert_eq!(board.pieces(Color::White).filter(|p| p.kind == crate::board::PieceKind::King).count(), 1);
            prop_assert_eq!(board.pieces(Color::Black).filter(|p| p.kind == crate::board::PieceKind::King).count(), 1);
            Ok(())
        })?;
    }
}
