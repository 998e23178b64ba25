//! Human-readable board rendering.

use std::fmt;

use super::state::Position;
use super::types::{Color, Square};

impl Position {
    /// Render the board as a text grid.
    ///
    /// `white_perspective` puts rank 1 at the bottom; otherwise the board is
    /// flipped. With `extra_info`, the side to move, castling rights, en
    /// passant target, and move counters are appended below the grid.
    #[must_use]
    pub fn pretty(&self, white_perspective: bool, extra_info: bool) -> String {
        let mut out = String::new();

        let ranks: Vec<usize> = if white_perspective {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        };
        let files: Vec<usize> = if white_perspective {
            (0..8).collect()
        } else {
            (0..8).rev().collect()
        };

        out.push_str("  +---+---+---+---+---+---+---+---+\n");
        for &rank in &ranks {
            out.push_str(&format!("{} |", rank + 1));
            for &file in &files {
                let ch = match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => ' ',
                };
                out.push_str(&format!(" {ch} |"));
            }
            out.push_str("\n  +---+---+---+---+---+---+---+---+\n");
        }
        out.push_str("   ");
        for &file in &files {
            out.push_str(&format!(" {}  ", (b'a' + file as u8) as char));
        }
        out.push('\n');

        if extra_info {
            out.push_str(&format!("Side to move: {}\n", self.side_to_move()));

            let mut castling = String::new();
            for (color, kingside, c) in [
                (Color::White, true, 'K'),
                (Color::White, false, 'Q'),
                (Color::Black, true, 'k'),
                (Color::Black, false, 'q'),
            ] {
                if self.castling().has(color, kingside) {
                    castling.push(c);
                }
            }
            if castling.is_empty() {
                castling.push('-');
            }
            out.push_str(&format!("Castling: {castling}\n"));

            let ep = self
                .en_passant()
                .map_or_else(|| "-".to_string(), |sq| sq.to_string());
            out.push_str(&format!("En passant: {ep}\n"));
            out.push_str(&format!(
                "Halfmove clock: {}  Fullmove: {}\n",
                self.halfmove_clock(),
                self.fullmove_number()
            ));
        }

        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty(true, false))
    }
}
