use crate::board::state::Position;
use crate::board::types::{Bitboard, Color, Move, MoveList, Rank, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let from_bb = Bitboard::from_square(from);
        let empty = self.all_occupied.not();

        let (single, start_rank, promotion_rank) = match color {
            Color::White => (from_bb.shift_north().and(empty), Rank::R2, Rank::R8),
            Color::Black => (from_bb.shift_south().and(empty), Rank::R7, Rank::R1),
        };

        if let Some(to) = single.iter().next() {
            push_pawn_move(moves, from, to, promotion_rank);

            if from.rank() == start_rank {
                let double = match color {
                    Color::White => single.shift_north().and(empty),
                    Color::Black => single.shift_south().and(empty),
                };
                if let Some(to) = double.iter().next() {
                    moves.push(Move::new(from, to));
                }
            }
        }

        // Captures, including onto the en passant square
        let attacks = match color {
            Color::White => from_bb.white_pawn_attacks(),
            Color::Black => from_bb.black_pawn_attacks(),
        };
        let mut capturable = self.occupied_by(color.opponent());
        if let Some(ep) = self.en_passant {
            capturable.set_square(ep);
        }
        for to in attacks.and(capturable) {
            push_pawn_move(moves, from, to, promotion_rank);
        }
    }
}

/// Push a pawn move, fanning out into the four promotion choices on the
/// last rank.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, promotion_rank: Rank) {
    if to.rank() == promotion_rank {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promoting(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
