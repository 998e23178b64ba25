//! FEN (Forsyth-Edwards Notation) codec.

use std::str::FromStr;

use super::error::FenError;
use super::state::Position;
use super::types::{Color, Piece, Square};

/// The FEN string of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Requires all six fields: placement, side to move, castling,
    /// en passant, halfmove clock, fullmove number.
    ///
    /// # Example
    /// ```
    /// use zugzwang::board::Position;
    ///
    /// let pos = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    /// assert_eq!(pos.legal_moves().len(), 14);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            // Ranks are listed top-down: the first is rank 8
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(FenError::InvalidPiece { ch: c });
                    }
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { ch: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::WrongRankWidth {
                            rank: rank + 1,
                            width: file + 1,
                        });
                    }
                    pos.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongRankWidth {
                    rank: rank + 1,
                    width: file,
                });
            }
        }

        pos.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if fields[2] != "-" {
            if fields[2].is_empty() {
                return Err(FenError::InvalidCastling {
                    found: fields[2].to_string(),
                });
            }
            for c in fields[2].chars() {
                let (color, kingside) = match c {
                    'K' => (Color::White, true),
                    'Q' => (Color::White, false),
                    'k' => (Color::Black, true),
                    'q' => (Color::Black, false),
                    _ => {
                        return Err(FenError::InvalidCastling {
                            found: fields[2].to_string(),
                        })
                    }
                };
                if pos.castling.has(color, kingside) {
                    return Err(FenError::InvalidCastling {
                        found: fields[2].to_string(),
                    });
                }
                pos.castling.set(color, kingside);
            }
        }

        pos.en_passant = if fields[3] == "-" {
            None
        } else {
            let sq = Square::from_str(fields[3]).map_err(|_| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?;
            Some(sq)
        };

        pos.halfmove_clock = fields[4].parse().map_err(|_| FenError::InvalidHalfmove {
            found: fields[4].to_string(),
        })?;
        pos.fullmove_number = fields[5].parse().map_err(|_| FenError::InvalidFullmove {
            found: fields[5].to_string(),
        })?;

        Ok(pos)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side} {castling} {en_passant} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
