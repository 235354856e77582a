use std::fmt;
use std::str::FromStr;

use super::error::TicTacToeError;
use super::mark::Mark;

pub const CELL_COUNT: usize = 9;

/// The 3x3 grid, cells numbered 0-8 row by row from the top left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Option<Mark>, TicTacToeError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(TicTacToeError::InvalidIndex { index })
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Empty cells in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(move |&index| self.cells[index].is_none())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns a copy with `mark` on `index`. The input is untouched.
    pub fn placed(&self, index: usize, mark: Mark) -> Result<Board, TicTacToeError> {
        if self.get(index)?.is_some() {
            return Err(TicTacToeError::CellOccupied { index });
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Ok(next)
    }

    /// Returns a copy with `index` cleared.
    pub fn cleared(&self, index: usize) -> Result<Board, TicTacToeError> {
        self.get(index)?;
        let mut previous = *self;
        previous.cells[index] = None;
        Ok(previous)
    }
}

/// Parses a cell index from text, rejecting anything outside 0-8.
pub fn parse_index(text: &str) -> Result<usize, TicTacToeError> {
    match text.trim().parse::<usize>() {
        Ok(index) if index < CELL_COUNT => Ok(index),
        _ => Err(TicTacToeError::InvalidCell {
            input: text.to_string(),
        }),
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Parses nine cells of `X`, `O` or `.`, ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TicTacToeError::InvalidBoard {
            input: s.to_string(),
        };
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(invalid());
        }

        let mut board = Board::new();
        for (index, &symbol) in symbols.iter().enumerate() {
            board.cells[index] = match symbol {
                '.' | '_' => None,
                other => Some(Mark::from_char(other).ok_or_else(invalid)?),
            };
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.map_or('.', |mark| mark.to_char()))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n{}", self)
    }
}
