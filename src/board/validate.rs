//! Position validation.

use super::error::PositionError;
use super::state::Position;
use super::types::{Bitboard, Color, Piece, Rank, Square};

impl Position {
    /// Check the position against the board invariants.
    ///
    /// Verifies that the piece bitboards are pairwise disjoint, each side
    /// has exactly one king, no pawn stands on rank 1 or 8, every castling
    /// right has its king and rook on their home squares, and the en
    /// passant square is coherent with the side to move. Returns the first
    /// violated rule.
    ///
    /// Not called automatically; positions produced by [`Position::from_fen`]
    /// or a sequence of legal moves from the start can be checked on demand.
    pub fn validate(&self) -> Result<(), PositionError> {
        self.check_disjoint()?;
        self.check_kings()?;
        self.check_pawn_ranks()?;
        self.check_castling()?;
        self.check_en_passant()?;
        Ok(())
    }

    fn check_disjoint(&self) -> Result<(), PositionError> {
        let mut seen = Bitboard::EMPTY;
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                let bb = self.pieces_of(color, piece);
                if seen.intersects(bb) {
                    let overlap = seen.and(bb);
                    // Report one overlapping square
                    if let Some(square) = overlap.iter().next() {
                        return Err(PositionError::OverlappingPieces { square });
                    }
                }
                seen = seen.or(bb);
            }
        }
        Ok(())
    }

    fn check_kings(&self) -> Result<(), PositionError> {
        for color in [Color::White, Color::Black] {
            let count = self.pieces_of(color, Piece::King).popcount();
            if count != 1 {
                return Err(PositionError::WrongKingCount { color, count });
            }
        }
        Ok(())
    }

    fn check_pawn_ranks(&self) -> Result<(), PositionError> {
        let pawns = self
            .pieces_of(Color::White, Piece::Pawn)
            .or(self.pieces_of(Color::Black, Piece::Pawn));
        let back_ranks = Bitboard::RANK_1.or(Bitboard::RANK_8);
        if let Some(square) = pawns.and(back_ranks).iter().next() {
            return Err(PositionError::PawnOnBackRank { square });
        }
        Ok(())
    }

    fn check_castling(&self) -> Result<(), PositionError> {
        let homes = [
            (Color::White, Square::E1, Square::H1, Square::A1),
            (Color::Black, Square::E8, Square::H8, Square::A8),
        ];
        for (color, king_home, rook_kingside, rook_queenside) in homes {
            let any_right = self.castling.has(color, true) || self.castling.has(color, false);
            if any_right && self.piece_at(king_home) != Some((color, Piece::King)) {
                return Err(PositionError::CastlingKingDisplaced { color });
            }
            for (kingside, rook_home) in [(true, rook_kingside), (false, rook_queenside)] {
                if self.castling.has(color, kingside)
                    && self.piece_at(rook_home) != Some((color, Piece::Rook))
                {
                    return Err(PositionError::CastlingRookDisplaced { color, kingside });
                }
            }
        }
        Ok(())
    }

    fn check_en_passant(&self) -> Result<(), PositionError> {
        let Some(square) = self.en_passant else {
            return Ok(());
        };
        let bad = PositionError::BadEnPassant { square };

        // The passing pawn belongs to the side that just moved; the target
        // square sits directly behind it and must itself be empty.
        let (expected_rank, pawn_rank) = match self.side_to_move {
            Color::White => (Rank::R6, Rank::R5),
            Color::Black => (Rank::R3, Rank::R4),
        };
        if square.rank() != expected_rank {
            return Err(bad);
        }
        if !self.is_empty_square(square) {
            return Err(bad);
        }
        let pawn_sq = Square::at(square.file(), pawn_rank);
        let expected_pawn = (self.side_to_move.opponent(), Piece::Pawn);
        if self.piece_at(pawn_sq) != Some(expected_pawn) {
            return Err(bad);
        }
        Ok(())
    }
}
