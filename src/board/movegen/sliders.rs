use crate::board::state::Position;
use crate::board::types::{Move, MoveList, Piece, Square};

impl Position {
    /// Generate moves for a bishop, rook, or queen on `from`.
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = self.side_to_move;
        let targets = self
            .attacks_from(from, color, piece)
            .and(self.occupied_by(color).not());
        for to in targets {
            moves.push(Move::new(from, to));
        }
    }
}
