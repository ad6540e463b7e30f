//! Castling eligibility and execution.

use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    Board::from_position_string(fen).unwrap()
}

#[test]
fn test_both_sides_available() {
    let board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let dests = board.legal_destinations(sq("e1"));
    assert!(dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_kingside_relocates_rook() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move_uci("e1g1").unwrap();
    assert_eq!(board.to_position_string(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

    let king = board.piece_at(sq("g1")).unwrap();
    let rook = board.piece_at(sq("f1")).unwrap();
    assert!(king.has_moved);
    assert!(rook.has_moved);
    assert_eq!(rook.square, sq("f1"));
}

#[test]
fn test_queenside_relocates_rook() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    board.make_move_uci("e8c8").unwrap();
    assert_eq!(board.to_position_string(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
}

#[test]
fn test_king_that_returned_home_cannot_castle() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for uci in ["e1e2", "a8b8", "e2e1", "b8a8"] {
        board.make_move_uci(uci).unwrap();
    }
    let king = board.piece_at(sq("e1")).unwrap();
    let rook = board.piece_at(sq("h1")).unwrap();
    assert!(king.has_moved);
    assert!(!board.can_castle(&king, &rook));

    let dests = board.legal_destinations(sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(!dests.contains(&sq("c1")));
}

#[test]
fn test_moved_rook_cannot_castle() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for uci in ["h1h2", "a8a7", "h2h1", "a7a8"] {
        board.make_move_uci(uci).unwrap();
    }
    let dests = board.legal_destinations(sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_no_castling_out_of_check() {
    let board = board("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let dests = board.legal_destinations(sq("e8"));
    assert!(!dests.contains(&sq("g8")));
    assert!(!dests.contains(&sq("c8")));
}

#[test]
fn test_no_castling_through_attacked_square() {
    let board = board("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let dests = board.legal_destinations(sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_pawn_controls_empty_transit_square() {
    let board = board("4k3/8/8/8/8/8/6p1/R3K2R w KQ - 0 1");
    let dests = board.legal_destinations(sq("e1"));
    assert!(!dests.contains(&sq("g1")));
    assert!(dests.contains(&sq("c1")));
}

#[test]
fn test_attacked_b_file_does_not_block_queenside() {
    let board = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(board.legal_destinations(sq("e1")).contains(&sq("c1")));
}

#[test]
fn test_occupied_path_blocks() {
    let board = board("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert!(!board.legal_destinations(sq("e1")).contains(&sq("c1")));

    let start = Board::new();
    let king = start.piece_at(sq("e1")).unwrap();
    let rook = start.piece_at(sq("h1")).unwrap();
    assert!(!start.can_castle(&king, &rook));
}

#[test]
fn test_can_castle_rejects_wrong_pieces() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("a1"), Color::White, PieceKind::Queen)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::Rook)
        .castle_kingside(Color::White)
        .castle_kingside(Color::Black)
        .build();
    let king = board.piece_at(sq("e1")).unwrap();
    let rook = board.piece_at(sq("h1")).unwrap();
    let queen = board.piece_at(sq("a1")).unwrap();
    let enemy_rook = board.piece_at(sq("h8")).unwrap();

    assert!(board.can_castle(&king, &rook));
    assert!(!board.can_castle(&king, &queen));
    assert!(!board.can_castle(&rook, &king));
    assert!(!board.can_castle(&king, &enemy_rook));
}
