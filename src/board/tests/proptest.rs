//! Property-based tests using proptest.
//!
//! Each property walks a random line of legal moves from the starting
//! position and checks an invariant at every step.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::prelude::*;
use rand::Rng;

use crate::board::{Color, Move, Piece, Position};

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Walk `num_moves` random legal moves, calling `check` on every position
/// reached (including the start).
fn random_walk(
    seed: u64,
    num_moves: usize,
    mut check: impl FnMut(&Position) -> Result<(), TestCaseError>,
) -> Result<(), TestCaseError> {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);

    check(&pos)?;
    for _ in 0..num_moves {
        let moves = pos.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos.make_move(mv);
        check(&pos)?;
    }
    Ok(())
}

proptest! {
    /// Legal moves never leave the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |pos| {
            let mover = pos.side_to_move();
            for &mv in &pos.legal_moves() {
                let mut next = pos.clone();
                next.make_move(mv);
                prop_assert!(!next.is_in_check(mover),
                    "legal move {mv} left the king in check in {}", pos.fen());
            }
            Ok(())
        })?;
    }

    /// Legal moves are a subset of pseudo-legal moves
    #[test]
    fn prop_legal_subset_of_pseudo(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |pos| {
            let pseudo = pos.pseudo_legal_moves();
            for &mv in &pos.legal_moves() {
                prop_assert!(pseudo.contains(mv),
                    "{mv} legal but not pseudo-legal in {}", pos.fen());
            }
            Ok(())
        })?;
    }

    /// Every position reachable by legal moves satisfies the board
    /// invariants: disjoint bitboards, one king per side, no pawns on the
    /// back ranks, coherent castling rights and en passant square
    #[test]
    fn prop_reachable_positions_are_valid(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |pos| {
            prop_assert!(pos.validate().is_ok(),
                "invalid position {}: {:?}", pos.fen(), pos.validate());
            Ok(())
        })?;
    }

    /// Exactly one king of each color survives any legal line
    #[test]
    fn prop_kings_never_captured(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |pos| {
            prop_assert!(pos.king_square(Color::White).is_some());
            prop_assert!(pos.king_square(Color::Black).is_some());
            Ok(())
        })?;
    }

    /// FEN encode/decode round-trips every reachable position
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |pos| {
            let fen = pos.fen();
            let restored = Position::from_fen(&fen);
            prop_assert!(restored.is_ok(), "FEN parse failed for {}", &fen);
            let restored = restored.unwrap();
            prop_assert_eq!(&restored, pos, "FEN round trip changed the position for {}", &fen);
            prop_assert_eq!(restored.fen(), fen);
            Ok(())
        })?;
    }

    /// UCI text round-trips every legal move
    #[test]
    fn prop_uci_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_walk(seed, num_moves, |pos| {
            for &mv in &pos.legal_moves() {
                prop_assert_eq!(Move::parse_uci(&mv.uci()), Ok(mv));
            }
            Ok(())
        })?;
    }

    /// SAN print/parse round-trips every legal move
    #[test]
    fn prop_san_round_trip(seed in seed_strategy(), num_moves in 1..=15usize) {
        random_walk(seed, num_moves, |pos| {
            for &mv in &pos.legal_moves() {
                let san = pos.san(mv);
                prop_assert_eq!(pos.parse_san(&san), Ok(mv),
                    "SAN round trip failed for {} in {}", san, pos.fen());
            }
            Ok(())
        })?;
    }

    /// The halfmove clock resets on pawn moves and captures and otherwise
    /// increments
    #[test]
    fn prop_halfmove_clock(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let was_pawn = pos.piece_on(mv.from()) == Some(Piece::Pawn);
            let was_capture = pos.piece_on(mv.to()).is_some();
            let before = pos.halfmove_clock();
            pos.make_move(mv);
            if was_pawn || was_capture {
                prop_assert_eq!(pos.halfmove_clock(), 0);
            } else {
                prop_assert_eq!(pos.halfmove_clock(), before + 1);
            }
        }
    }
}
