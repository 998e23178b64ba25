use crate::board::state::Position;
use crate::board::types::{Color, File, Move, MoveList, Piece, Rank, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let targets = self
            .attacks_from(from, color, Piece::King)
            .and(self.occupied_by(color).not());
        for to in targets {
            moves.push(Move::new(from, to));
        }

        self.generate_castling_moves(from, moves);
    }

    /// Castling requires the right, empty squares between king and rook, the
    /// rook on its home square, and that the king does not stand on, pass
    /// through, or land on an attacked square. On the queen side only the
    /// king's own path matters; the b-file square may be attacked.
    fn generate_castling_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let home = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        if from != home {
            return;
        }
        let rank = match color {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        };
        let opponent = color.opponent();

        if self.castling.has(color, true) {
            let f = Square::at(File::F, rank);
            let g = Square::at(File::G, rank);
            let rook = Square::at(File::H, rank);
            if self.is_empty_square(f)
                && self.is_empty_square(g)
                && self.piece_at(rook) == Some((color, Piece::Rook))
                && !self.is_square_attacked(from, opponent)
                && !self.is_square_attacked(f, opponent)
                && !self.is_square_attacked(g, opponent)
            {
                moves.push(Move::new(from, g));
            }
        }

        if self.castling.has(color, false) {
            let b = Square::at(File::B, rank);
            let c = Square::at(File::C, rank);
            let d = Square::at(File::D, rank);
            let rook = Square::at(File::A, rank);
            if self.is_empty_square(b)
                && self.is_empty_square(c)
                && self.is_empty_square(d)
                && self.piece_at(rook) == Some((color, Piece::Rook))
                && !self.is_square_attacked(from, opponent)
                && !self.is_square_attacked(d, opponent)
                && !self.is_square_attacked(c, opponent)
            {
                moves.push(Move::new(from, c));
            }
        }
    }
}
