//! Error types for position and move-text operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly 6 whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { ch: char },
    /// A rank's piece letters and empty runs do not sum to 8 files
    WrongRankWidth { rank: usize, width: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid or repeated character in the castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Non-numeric halfmove clock
    InvalidHalfmove { found: String },
    /// Non-numeric fullmove number
    InvalidFullmove { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { ch } => {
                write!(f, "Invalid piece character '{ch}' in FEN")
            }
            FenError::WrongRankWidth { rank, width } => {
                write!(f, "Rank {rank} of FEN placement covers {width} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmove { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmove { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for UCI move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece letter
    InvalidPromotion { ch: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { ch } => {
                write!(f, "Invalid promotion piece '{ch}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// Invalid piece character
    InvalidPiece { ch: char },
    /// Invalid or missing destination square
    InvalidSquare { notation: String },
    /// A pawn capture was written without its source file
    MissingPawnFile { san: String },
    /// Ambiguous move (multiple legal moves match)
    AmbiguousMove { san: String },
    /// No matching legal move found
    NoMatchingMove { san: String },
    /// Invalid promotion piece
    InvalidPromotion { ch: char },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::InvalidPiece { ch } => {
                write!(f, "Invalid piece character '{ch}' in SAN")
            }
            SanError::InvalidSquare { notation } => {
                write!(f, "Invalid destination square in SAN '{notation}'")
            }
            SanError::MissingPawnFile { san } => {
                write!(f, "Pawn capture '{san}' must include the source file")
            }
            SanError::AmbiguousMove { san } => {
                write!(f, "Ambiguous move '{san}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
            SanError::InvalidPromotion { ch } => {
                write!(f, "Invalid promotion piece '{ch}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

/// Error type for position validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Two piece bitboards both contain the same square
    OverlappingPieces { square: Square },
    /// A side does not have exactly one king
    WrongKingCount { color: Color, count: u32 },
    /// A pawn sits on rank 1 or rank 8
    PawnOnBackRank { square: Square },
    /// A castling right is set but the king is not on its home square
    CastlingKingDisplaced { color: Color },
    /// A castling right is set but the rook is not on its home square
    CastlingRookDisplaced { color: Color, kingside: bool },
    /// The en passant square is inconsistent with the side to move
    BadEnPassant { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OverlappingPieces { square } => {
                write!(f, "Multiple pieces occupy {square}")
            }
            PositionError::WrongKingCount { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly 1")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank at {square}")
            }
            PositionError::CastlingKingDisplaced { color } => {
                write!(f, "{color} has a castling right but the king is off its home square")
            }
            PositionError::CastlingRookDisplaced { color, kingside } => {
                let side = if *kingside { "kingside" } else { "queenside" };
                write!(f, "{color} has the {side} castling right but the rook is off its home square")
            }
            PositionError::BadEnPassant { square } => {
                write!(f, "En passant square {square} is inconsistent with the position")
            }
        }
    }
}

impl std::error::Error for PositionError {}
