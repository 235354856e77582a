use super::square::Square;
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = Square::new(file, rank)
                    .and_then(|square| self.get(square))
                    .map_or('.', |piece| piece.to_fen());
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n{}", self)
    }
}

#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::chess::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (kind, color) = $crate::chess::board::piece::PieceKind::from_fen(c)
                    .expect("Invalid character in chess position");
                // The macro input is from white's perspective, so the first
                // character is a8 and the last is h1.
                let rank = 7 - (i / 8) as u8;
                let file = (i % 8) as u8;
                let square = $crate::chess::board::square::Square::new(file, rank)
                    .expect("square is on the board");
                board
                    .put(square, $crate::chess::board::piece::Piece::new(kind, color))
                    .expect("square is empty");
            }
        }
        board
    }};
}
