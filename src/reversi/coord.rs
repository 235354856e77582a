use std::fmt;
use std::str::FromStr;

use super::error::ReversiError;

pub const BOARD_SIZE: usize = 8;

/// A cell on the Reversi board, addressed by row and column from the top
/// left. In text a cell is its column letter then its row number, so row 2,
/// column 3 reads "d3".
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Self, ReversiError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ReversiError::OutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The neighbouring cell one step along `(row_delta, col_delta)`.
    pub fn step(&self, (row_delta, col_delta): (i8, i8)) -> Option<Coord> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReversiError::InvalidCell {
            input: s.to_string(),
        };
        let mut chars = s.chars();
        let (col_char, row_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => (col.to_ascii_lowercase(), row),
            _ => return Err(invalid()),
        };
        if !('a'..='h').contains(&col_char) || !('1'..='8').contains(&row_char) {
            return Err(invalid());
        }
        Coord::new((row_char as u8 - b'1') as usize, (col_char as u8 - b'a') as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Coord::new(2, 3).unwrap(), "d3".parse().unwrap());
        assert_eq!(Coord::new(7, 0).unwrap(), "A8".parse().unwrap());
        assert_eq!("d3", Coord::new(2, 3).unwrap().to_string());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "d", "i1", "a9", "a0", "d33"] {
            assert_eq!(
                Err(ReversiError::InvalidCell {
                    input: input.to_string()
                }),
                input.parse::<Coord>()
            );
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Err(ReversiError::OutOfBounds { row: 8, col: 0 }),
            Coord::new(8, 0)
        );
    }

    #[test]
    fn test_step_stays_on_board() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(None, corner.step((-1, 0)));
        assert_eq!(Some(Coord::new(1, 1).unwrap()), corner.step((1, 1)));
        assert_eq!(64, Coord::all().count());
    }
}
