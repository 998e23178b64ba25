//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the human-readable move notation used by PGN: "e4", "Nf3",
//! "Bxc6+", "O-O", "exd5", "e8=Q#". Printing needs the current position to
//! compute disambiguation and the resulting position for the check suffix;
//! parsing resolves the text against the current legal moves.

use super::error::SanError;
use super::state::Position;
use super::types::{Color, File, Move, Piece, Rank, Square};

impl Position {
    /// Format a legal move in Standard Algebraic Notation.
    ///
    /// # Example
    /// ```
    /// use zugzwang::board::Position;
    ///
    /// let pos = Position::new();
    /// let mv = pos.parse_uci_move("g1f3").unwrap();
    /// assert_eq!(pos.san(mv), "Nf3");
    /// ```
    #[must_use]
    pub fn san(&self, m: Move) -> String {
        let mut san = self.san_body(m);

        let mut next = self.clone();
        next.make_move(m);
        if next.is_checkmate() {
            san.push('#');
        } else if next.is_check() {
            san.push('+');
        }

        san
    }

    fn san_body(&self, m: Move) -> String {
        let Some(piece) = self.piece_on(m.from()) else {
            return m.to().to_string();
        };

        if piece == Piece::King && is_castle_shape(m, self.side_to_move) {
            return if m.to().file() == File::G {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let is_capture = self.piece_at(m.to()).is_some()
            || (piece == Piece::Pawn && Some(m.to()) == self.en_passant);

        let mut out = String::new();
        if piece == Piece::Pawn {
            if is_capture {
                out.push(m.from().file().to_char());
                out.push('x');
            }
            out.push_str(&m.to().to_string());
            if let Some(promo) = m.promotion() {
                out.push('=');
                out.push(promo.to_char().to_ascii_uppercase());
            }
        } else {
            out.push(piece.to_char().to_ascii_uppercase());
            out.push_str(&self.disambiguation(m, piece));
            if is_capture {
                out.push('x');
            }
            out.push_str(&m.to().to_string());
        }
        out
    }

    /// The smallest qualifier distinguishing `m` from other legal moves of
    /// the same piece type to the same destination: nothing, the source
    /// file, the source rank, or the full source square. Only legal
    /// alternatives count, so a pinned twin forces no qualifier.
    fn disambiguation(&self, m: Move, piece: Piece) -> String {
        let mut same_file = false;
        let mut same_rank = false;
        let mut any = false;
        for other in &self.legal_moves() {
            if other.to() != m.to()
                || other.from() == m.from()
                || self.piece_on(other.from()) != Some(piece)
            {
                continue;
            }
            any = true;
            same_file |= other.from().file() == m.from().file();
            same_rank |= other.from().rank() == m.from().rank();
        }

        if !any {
            String::new()
        } else if !same_file {
            m.from().file().to_string()
        } else if !same_rank {
            m.from().rank().to_string()
        } else {
            m.from().to_string()
        }
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Accepts notation like "e4", "Nf3", "Bxc6", "O-O", "exd5", "e8=Q",
    /// with optional trailing check indicators (`+`, `#`) and annotations
    /// (`?`, `!`). The move is resolved against the current legal moves.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let trimmed = san.trim();
        if trimmed.is_empty() {
            return Err(SanError::Empty);
        }
        let stripped = trimmed.trim_end_matches(['+', '#', '?', '!']);

        if stripped == "O-O" || stripped == "0-0" {
            return self.find_castling_move(true);
        }
        if stripped == "O-O-O" || stripped == "0-0-0" {
            return self.find_castling_move(false);
        }

        let chars: Vec<char> = stripped.chars().collect();
        let (piece, mut body) = match chars.first() {
            None => return Err(SanError::Empty),
            Some(&c) if c.is_ascii_uppercase() => {
                let p = match c {
                    'N' => Piece::Knight,
                    'B' => Piece::Bishop,
                    'R' => Piece::Rook,
                    'Q' => Piece::Queen,
                    'K' => Piece::King,
                    _ => return Err(SanError::InvalidPiece { ch: c }),
                };
                (p, &chars[1..])
            }
            Some(_) => (Piece::Pawn, &chars[..]),
        };

        // Promotion suffix: "=Q"
        let mut promotion = None;
        if body.len() >= 2 && body[body.len() - 2] == '=' {
            let ch = body[body.len() - 1];
            let promo = Piece::from_char(ch).ok_or(SanError::InvalidPromotion { ch })?;
            if matches!(promo, Piece::Pawn | Piece::King) {
                return Err(SanError::InvalidPromotion { ch });
            }
            promotion = Some(promo);
            body = &body[..body.len() - 2];
        }

        // Destination square: the last two characters
        let invalid_square = || SanError::InvalidSquare {
            notation: stripped.to_string(),
        };
        if body.len() < 2 {
            return Err(invalid_square());
        }
        let dest_file = File::from_char(body[body.len() - 2]).ok_or_else(invalid_square)?;
        let dest_rank = Rank::from_char(body[body.len() - 1]).ok_or_else(invalid_square)?;
        let dest = Square::at(dest_file, dest_rank);
        let mut rest = &body[..body.len() - 2];

        let mut is_capture = false;
        if rest.last() == Some(&'x') {
            is_capture = true;
            rest = &rest[..rest.len() - 1];
        }

        // Optional disambiguation: file, rank, or both
        let (disambig_file, disambig_rank) = match *rest {
            [] => (None, None),
            [c] => {
                if let Some(file) = File::from_char(c) {
                    (Some(file), None)
                } else if let Some(rank) = Rank::from_char(c) {
                    (None, Some(rank))
                } else {
                    return Err(invalid_square());
                }
            }
            [f, r] => {
                let file = File::from_char(f).ok_or_else(invalid_square)?;
                let rank = Rank::from_char(r).ok_or_else(invalid_square)?;
                (Some(file), Some(rank))
            }
            _ => return Err(invalid_square()),
        };

        if piece == Piece::Pawn && is_capture && disambig_file.is_none() {
            return Err(SanError::MissingPawnFile {
                san: trimmed.to_string(),
            });
        }

        let mut matching: Option<Move> = None;
        for &m in &self.legal_moves() {
            if m.to() != dest
                || self.piece_on(m.from()) != Some(piece)
                || m.promotion() != promotion
            {
                continue;
            }
            if disambig_file.is_some_and(|f| m.from().file() != f)
                || disambig_rank.is_some_and(|r| m.from().rank() != r)
            {
                continue;
            }
            if matching.is_some() {
                return Err(SanError::AmbiguousMove {
                    san: trimmed.to_string(),
                });
            }
            matching = Some(m);
        }

        matching.ok_or_else(|| SanError::NoMatchingMove {
            san: trimmed.to_string(),
        })
    }

    fn find_castling_move(&self, kingside: bool) -> Result<Move, SanError> {
        let color = self.side_to_move;
        let rank = match color {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        };
        let home = Square::at(File::E, rank);
        let dest_file = if kingside { File::G } else { File::C };
        let m = Move::new(home, Square::at(dest_file, rank));

        if self.piece_at(home) == Some((color, Piece::King)) && self.legal_moves().contains(m) {
            Ok(m)
        } else {
            Err(SanError::NoMatchingMove {
                san: if kingside { "O-O" } else { "O-O-O" }.to_string(),
            })
        }
    }

    /// Parse a SAN move and apply it in one call.
    pub fn play_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san)?;
        self.make_move(mv);
        Ok(mv)
    }
}

fn is_castle_shape(m: Move, color: Color) -> bool {
    let home = match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    };
    m.from() == home && (m.to().file() == File::G || m.to().file() == File::C) && {
        let dist = m.from().file_index().abs_diff(m.to().file_index());
        dist == 2
    }
}
