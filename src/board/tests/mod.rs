//! Cross-module board tests.

mod proptest;

use crate::board::Position;

#[test]
fn test_starting_position_move_count() {
    let pos = Position::new();
    assert_eq!(pos.pseudo_legal_moves().len(), 20);
    assert_eq!(pos.legal_moves().len(), 20);
}

#[test]
fn test_apply_a_full_game() {
    // Scholar's mate
    let mut pos = Position::new();
    for san in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7"] {
        pos.play_san(san).unwrap();
    }
    assert!(pos.is_check());
    assert!(pos.is_checkmate());
    assert!(pos.legal_moves().is_empty());
}
