use crate::board::state::Position;
use crate::board::types::{Move, MoveList, Piece, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let targets = self
            .attacks_from(from, color, Piece::Knight)
            .and(self.occupied_by(color).not());
        for to in targets {
            moves.push(Move::new(from, to));
        }
    }
}
