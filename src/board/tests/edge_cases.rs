//! Edge case tests for special chess positions and moves.

use crate::board::{Board, Color, GameStatus, Move, MoveError, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_twenty_opening_moves_for_each_side() {
    let board = Board::new();
    assert_eq!(board.legal_moves().len(), 20);
    assert_eq!(board.legal_move_count(Color::Black), 20);

    for mv in board.legal_moves() {
        let after = board.apply_move(mv).unwrap();
        assert_eq!(after.legal_moves().len(), 20, "black replies after {mv}");
    }
}

#[test]
fn test_stalemate_position() {
    let board = Board::from_position_string("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_promotion_to_queen_sets_has_moved() {
    let board = Board::from_position_string("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let next = board
        .apply_move(Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Queen))
        .unwrap();
    let queen = next.piece_at(sq("a8")).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.color, Color::White);
    assert_eq!(queen.square, sq("a8"));
    assert!(queen.has_moved);
    assert!(next.piece_at(sq("a7")).is_none());
}

#[test]
fn test_underpromotion_to_knight() {
    let board = Board::from_position_string("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let moves = board.legal_moves();

    let knight_promo = moves
        .iter()
        .find(|m| m.promotion() == Some(PieceKind::Knight));
    assert!(
        knight_promo.is_some(),
        "Knight promotion should be available"
    );

    let next = board.apply_move(*knight_promo.unwrap()).unwrap();
    assert_eq!(next.piece_at(sq("a8")).unwrap().kind, PieceKind::Knight);
}

#[test]
fn test_capture_promotion() {
    let board = Board::from_position_string("1r5k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let next = board.apply_uci_move("a7b8r").unwrap();
    let rook = next.piece_at(sq("b8")).unwrap();
    assert_eq!((rook.kind, rook.color), (PieceKind::Rook, Color::White));
}

#[test]
fn test_double_check_only_king_can_move() {
    let board = Board::from_position_string("4k3/8/8/1b6/8/8/3r4/3K4 w - - 0 1").unwrap();
    let moves = board.legal_moves();
    assert!(!moves.is_empty());

    for mv in &moves {
        assert_eq!(
            mv.from(),
            sq("d1"),
            "Only king should be able to move in double check"
        );
    }
}

#[test]
fn test_checkmate_back_rank() {
    let board = Board::from_position_string("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let next = board.apply_uci_move("a1a8").unwrap();
    assert!(next.is_checkmate(Color::Black));
    assert!(!next.is_stalemate(Color::Black));
    assert_eq!(next.status(), GameStatus::Checkmate);
}

#[test]
fn test_mate_and_stalemate_are_exclusive() {
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
        "6kR/5ppp/8/8/8/8/8/6K1 b - - 1 1",
        "4k3/8/8/8/4q3/8/3N4/4K3 w - - 0 1",
        "8/8/8/8/8/8/8/K1k5 w - - 0 1",
    ];
    for fen in positions {
        let board = Board::from_position_string(fen).unwrap();
        for color in Color::BOTH {
            assert!(
                !(board.is_checkmate(color) && board.is_stalemate(color)),
                "{fen} reports both mate and stalemate for {color}"
            );
        }
    }
}

#[test]
fn test_every_legal_move_leaves_king_safe() {
    let board = Board::from_position_string(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    for mv in board.legal_moves() {
        let next = board.apply_move(mv).unwrap();
        assert!(!next.is_in_check(Color::White), "{mv} leaves the king attacked");
    }
}

#[test]
fn test_moving_opponent_piece_is_rejected() {
    let board = Board::new();
    assert_eq!(
        board.apply_move(Move::new(sq("b8"), sq("c6"))),
        Err(MoveError::WrongSide { square: sq("b8") })
    );
}

#[test]
fn test_uci_and_direct_application_agree() {
    let board = Board::new();
    let via_uci = board.apply_uci_move("b1c3").unwrap();
    let direct = board.apply_move(Move::new(sq("b1"), sq("c3"))).unwrap();
    assert_eq!(via_uci, direct);
}

#[test]
fn test_clones_are_independent() {
    let board = Board::new();
    let mut copy = board.clone();
    copy.make_move_uci("e2e4").unwrap();
    let pawn = board.piece_at(sq("e2")).unwrap();
    assert_eq!(pawn.square, sq("e2"));
    assert!(!pawn.has_moved);
    assert!(board.piece_at(sq("e4")).is_none());
}
