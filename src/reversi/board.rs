use std::fmt;

use super::coord::{Coord, BOARD_SIZE};
use super::player::Player;

/// Disc placement on an 8x8 Reversi board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    /// The four centre discs, white on the d4/e5 diagonal.
    pub fn starting_position() -> Self {
        let mut board = Self::new();
        let center = BOARD_SIZE / 2;
        board.cells[center - 1][center - 1] = Some(Player::White);
        board.cells[center - 1][center] = Some(Player::Black);
        board.cells[center][center - 1] = Some(Player::Black);
        board.cells[center][center] = Some(Player::White);
        board
    }

    pub fn get(&self, coord: Coord) -> Option<Player> {
        self.cells[coord.row()][coord.col()]
    }

    pub fn set(&mut self, coord: Coord, disc: Option<Player>) {
        self.cells[coord.row()][coord.col()] = disc;
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&disc| disc == Some(player))
            .count()
    }

    pub fn discs(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        Coord::all().filter_map(move |coord| self.get(coord).map(|player| (coord, player)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in cells {
                write!(f, "{}", cell.map_or('.', |player| player.to_char()))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = Board::starting_position();
        assert_eq!(2, board.count(Player::Black));
        assert_eq!(2, board.count(Player::White));
        assert_eq!(Some(Player::White), board.get("d4".parse().unwrap()));
        assert_eq!(Some(Player::Black), board.get("e4".parse().unwrap()));
        assert_eq!(Some(Player::Black), board.get("d5".parse().unwrap()));
        assert_eq!(Some(Player::White), board.get("e5".parse().unwrap()));
    }

    #[test]
    fn test_display() {
        let expected = "\
1 ........
2 ........
3 ........
4 ...WB...
5 ...BW...
6 ........
7 ........
8 ........
  abcdefgh";
        assert_eq!(expected, Board::starting_position().to_string());
    }
}
