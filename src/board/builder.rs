//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use zugzwang::board::{Color, Piece, PositionBuilder, Square};
//!
//! let pos = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece(Square::A2, Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(pos.validate().is_ok());
//! ```

use super::state::Position;
use super::types::{CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square::new(0, file), Color::White, piece));
            builder.pieces.push((Square::new(7, file), Color::Black, piece));
            builder
                .pieces
                .push((Square::new(1, file), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Square::new(6, file), Color::Black, Piece::Pawn));
        }

        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing any existing piece there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, false);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Set the halfmove clock (for the fifty-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    ///
    /// No validation is performed; call [`Position::validate`] on the result
    /// to check the board invariants.
    #[must_use]
    pub fn build(self) -> Position {
        let mut pos = Position::empty();

        for (square, color, piece) in self.pieces {
            pos.set_piece(square, color, piece);
        }

        pos.side_to_move = self.side_to_move;
        pos.castling = self.castling;
        pos.en_passant = self.en_passant;
        pos.halfmove_clock = self.halfmove_clock;
        pos.fullmove_number = self.fullmove_number;

        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built, Position::new());
    }

    #[test]
    fn test_kings_only() {
        let pos = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .build();

        assert_eq!(pos.all_occupied().popcount(), 2);
        assert!(pos.validate().is_ok());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let pos = PositionBuilder::new()
            .piece(Square::E4, Color::White, Piece::Knight)
            .piece(Square::E4, Color::Black, Piece::Queen)
            .build();

        assert_eq!(pos.piece_at(Square::E4), Some((Color::Black, Piece::Queen)));
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(Square::A1)
            .build();

        assert_eq!(pos.piece_at(Square::A1), None);
        assert!(pos.piece_at(Square::B1).is_some());
    }

    #[test]
    fn test_castling_rights() {
        let pos = PositionBuilder::starting_position()
            .castling(CastlingRights::none())
            .castle_kingside(Color::White)
            .build();

        assert!(pos.castling().has(Color::White, true));
        assert!(!pos.castling().has(Color::White, false));
        assert!(!pos.castling().has(Color::Black, true));
    }

    #[test]
    fn test_state_fields() {
        let pos = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(30)
            .build();

        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.halfmove_clock(), 12);
        assert_eq!(pos.fullmove_number(), 30);
        assert_eq!(pos.fen(), "4k3/8/8/8/8/8/8/4K3 b - - 12 30");
    }

    #[test]
    fn test_builder_feeds_validator() {
        // A deliberately broken position: pawn on the back rank
        let pos = PositionBuilder::new()
            .piece(Square::E1, Color::White, Piece::King)
            .piece(Square::E8, Color::Black, Piece::King)
            .piece(Square::A8, Color::White, Piece::Pawn)
            .build();

        assert!(pos.validate().is_err());
    }
}
