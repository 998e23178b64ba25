//! Integration tests exercising the public API end to end.

use zugzwang::board::{Move, Position, Square, STARTING_FEN};

#[test]
fn test_e2e4_from_start() {
    let mut pos = Position::new();
    pos.play_uci_move("e2e4").unwrap();
    assert_eq!(
        pos.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_black_double_push_sets_en_passant() {
    let mut pos: Position = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        .parse()
        .unwrap();
    pos.play_uci_move("f7f5").unwrap();
    assert_eq!(
        pos.fen(),
        "rnbqkbnr/ppppp1pp/8/5p2/4P3/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 2"
    );
}

#[test]
fn test_kingside_castle_updates_rights_and_rook() {
    let mut pos: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1"
        .parse()
        .unwrap();
    pos.make_move(Move::new(Square::E1, Square::G1));
    assert_eq!(
        pos.fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1RK1 b kq - 1 1"
    );
}

#[test]
fn test_san_en_passant_capture() {
    let pos: Position = "rnbqkbnr/ppp1p1pp/8/3p4/4PpP1/8/PPPP1P1P/RNBQKBNR b KQkq g3 0 1"
        .parse()
        .unwrap();
    let mv = pos.parse_san("fxg3").unwrap();
    assert_eq!(mv, Move::new(Square::F4, Square::G3));

    let mut next = pos.clone();
    next.make_move(mv);
    assert_eq!(next.piece_at(Square::G4), None);
    assert!(next.piece_at(Square::G3).is_some());
}

#[test]
fn test_checkmate_has_no_moves() {
    let pos: Position = "rnbq2nr/ppp1bRkN/4p1B1/3PP1Qp/2P5/6P1/PP4PP/R5K1 b - - 7 26"
        .parse()
        .unwrap();
    assert!(pos.is_check());
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_stalemate_has_no_moves_and_no_check() {
    let pos: Position = "5bnr/4p1pq/4Qpkr/7p/7P/4P3/PPPP1PP1/RNB1KBNR b KQ - 2 10"
        .parse()
        .unwrap();
    assert!(!pos.is_check());
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_default_position_fen_is_canonical() {
    assert_eq!(Position::new().fen(), STARTING_FEN);
    assert_eq!(Position::from_fen(STARTING_FEN).unwrap(), Position::new());
}

#[test]
fn test_play_a_short_game_through_the_boundary_api() {
    // The PGN-layer surface: SAN parse, make_move, legal_moves, is_check,
    // FEN encode
    let mut pos = Position::new();
    for san in ["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6", "dxc6", "O-O"] {
        let mv = pos.parse_san(san).expect(san);
        pos.make_move(mv);
    }
    assert!(!pos.is_check());
    assert_eq!(
        pos.fen(),
        "r1bqkbnr/1pp2ppp/p1p5/4p3/4P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 1 5"
    );
    assert!(!pos.legal_moves().is_empty());
}

#[test]
fn test_uci_boundary_round_trip() {
    // The UCI-layer surface: move text only
    let pos = Position::new();
    for mv in &pos.legal_moves() {
        let parsed: Move = mv.uci().parse().unwrap();
        assert_eq!(parsed, *mv);
    }
}

#[test]
fn test_copies_do_not_share_state() {
    let original = Position::new();
    let mut copy = original.clone();
    copy.play_uci_move("e2e4").unwrap();
    assert_eq!(original, Position::new());
    assert_ne!(original, copy);
}
