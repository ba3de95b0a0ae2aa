//! Special positions and rule edge cases.

use crate::board::{Board, Color, Move, Piece, Square};

fn apply_uci(board: &mut Board, uci: &str) {
    board
        .make_move_uci(uci)
        .unwrap_or_else(|e| panic!("uci move {uci} not legal: {e}"));
}

fn has_move(board: &mut Board, uci: &str) -> bool {
    board.generate_moves().iter().any(|m| m.to_string() == uci)
}

// ============================================================================
// Castling rights
// ============================================================================

#[test]
fn test_king_move_drops_both_rights_permanently() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(board.has_castling_right(Color::White, 'K'));
    assert!(board.has_castling_right(Color::White, 'Q'));

    // King steps out and back: rights must not come back
    apply_uci(&mut board, "e1e2");
    apply_uci(&mut board, "a8b8");
    apply_uci(&mut board, "e2e1");

    assert!(!board.has_castling_right(Color::White, 'K'));
    assert!(!board.has_castling_right(Color::White, 'Q'));
    // Black queenside went with the a8 rook move, kingside remains
    assert!(!board.has_castling_right(Color::Black, 'Q'));
    assert!(board.has_castling_right(Color::Black, 'K'));
    assert!(!has_move(&mut board, "e8c8"));
}

#[test]
fn test_rook_capture_drops_victims_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/6n1/8/R3K2R b KQkq - 0 1");
    // Knight takes the h1 rook
    apply_uci(&mut board, "g3h1");
    assert!(!board.has_castling_right(Color::White, 'K'));
    assert!(board.has_castling_right(Color::White, 'Q'));
}

#[test]
fn test_unmake_restores_castling_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let rights_before = board.castling_rights;

    let mv = board.parse_move("e1e2").unwrap();
    board.make_move(mv);
    assert!(!board.has_castling_right(Color::White, 'K'));
    board.unmake_move();
    assert_eq!(board.castling_rights, rights_before);
}

#[test]
fn test_castling_blocked_by_attack_on_path() {
    // Black rook on f8 attacks f1, the king's pass-through square
    let mut board = Board::from_fen("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!has_move(&mut board, "e1g1"));
    // Queenside path (d1, c1) is clear of attacks
    assert!(has_move(&mut board, "e1c1"));
}

#[test]
fn test_castling_blocked_while_in_check() {
    let mut board = Board::from_fen("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!has_move(&mut board, "e1g1"));
    assert!(!has_move(&mut board, "e1c1"));
}

#[test]
fn test_queenside_b_file_attack_does_not_block() {
    // The b1 square is attacked but the king never crosses it
    let mut board = Board::from_fen("1r6/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(has_move(&mut board, "e1c1"));
}

#[test]
fn test_castling_requires_empty_between() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    assert!(!has_move(&mut board, "e1g1"));
    assert!(!has_move(&mut board, "e1c1"));
}

// ============================================================================
// En passant
// ============================================================================

#[test]
fn test_en_passant_sequence_from_startpos() {
    let mut board = Board::new();
    apply_uci(&mut board, "e2e4");
    apply_uci(&mut board, "d7d5");
    apply_uci(&mut board, "e4e5");
    apply_uci(&mut board, "f7f5");

    assert_eq!(board.en_passant_target, Some(Square::new(5, 5)));
    assert!(has_move(&mut board, "e5f6"));

    apply_uci(&mut board, "e5f6");
    // The f5 pawn is captured
    assert_eq!(board.piece_at(Square::new(4, 5)), None);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut board = Board::new();
    apply_uci(&mut board, "e2e4");
    apply_uci(&mut board, "d7d5");
    apply_uci(&mut board, "e4e5");
    apply_uci(&mut board, "f7f5");
    // White declines the capture
    apply_uci(&mut board, "g1f3");
    apply_uci(&mut board, "g8f6");
    assert_eq!(board.en_passant_target, None);
    assert!(!has_move(&mut board, "e5f6"));
}

#[test]
fn test_en_passant_pinned_pawn_cannot_capture() {
    // Capturing en passant would clear the fifth rank and expose the white
    // king to the h5 rook
    let mut board = Board::from_fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1");
    assert!(!has_move(&mut board, "b5c6"));
    // The plain push is still available
    assert!(has_move(&mut board, "b5b6"));
}

// ============================================================================
// Promotions
// ============================================================================

#[test]
fn test_promotion_generates_four_moves() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();
    let promotions: Vec<&Move> = moves.iter().filter(|m| m.is_promotion()).collect();
    assert_eq!(promotions.len(), 4);

    let kinds: Vec<Option<Piece>> = promotions.iter().map(|m| m.promotion_piece()).collect();
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(kinds.contains(&Some(piece)));
    }
}

#[test]
fn test_promotion_capture() {
    let mut board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    assert!(has_move(&mut board, "a7b8q"));
    apply_uci(&mut board, "a7b8q");
    assert_eq!(
        board.piece_at(Square::new(7, 1)),
        Some((Color::White, Piece::Queen))
    );
}

#[test]
fn test_promotion_push_blocked() {
    let mut board = Board::from_fen("n3k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    // The knight on a8 blocks the push, and there is nothing to capture
    assert!(!has_move(&mut board, "a7a8q"));
}

// ============================================================================
// Pins and evasions
// ============================================================================

#[test]
fn test_pinned_piece_cannot_move_away() {
    // The e2 knight is pinned against the king by the e8 rook
    let mut board = Board::from_fen("4r3/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let moves = board.generate_moves();
    for m in &moves {
        assert_ne!(m.from(), Square::new(1, 4), "pinned knight moved: {m}");
    }
}

#[test]
fn test_check_must_be_answered() {
    let mut board = Board::from_fen("4k3/8/8/8/7b/8/3P4/4K3 w - - 0 1");
    assert!(board.is_in_check(Color::White));
    let moves = board.generate_moves();
    for m in &moves {
        board.make_move(*m);
        assert!(!board.is_in_check(Color::White), "move {m} leaves check");
        board.unmake_move();
    }
}

#[test]
fn test_double_push_requires_both_squares_empty() {
    let mut board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(!has_move(&mut board, "e2e4"));
    assert!(!has_move(&mut board, "e2e3"));
}
