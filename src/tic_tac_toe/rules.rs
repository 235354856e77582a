use super::board::Board;
use super::mark::Mark;

pub type Line = [usize; 3];

pub const WINNING_LINES: [Line; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The first completed line and its owner.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match cells[a] {
            Some(mark) if cells[b] == Some(mark) && cells[c] == Some(mark) => Some((mark, line)),
            _ => None,
        }
    })
}

pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}

/// Lines where `mark` holds two cells and the third is empty.
pub fn threat_count(board: &Board, mark: Mark) -> usize {
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .filter(|line| {
            let owned = line.iter().filter(|&&i| cells[i] == Some(mark)).count();
            let empty = line.iter().filter(|&&i| cells[i].is_none()).count();
            owned == 2 && empty == 1
        })
        .count()
}

/// An empty cell that completes a line for `mark`, lowest index first.
pub fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_cells().find(|&index| {
        board
            .placed(index, mark)
            .map_or(false, |next| winner(&next) == Some(mark))
    })
}

fn creates_fork(board: &Board, index: usize, mark: Mark) -> bool {
    board
        .placed(index, mark)
        .map_or(false, |next| threat_count(&next, mark) >= 2)
}

/// An empty cell that leaves `mark` with two open threats at once.
pub fn fork_cell(board: &Board, mark: Mark) -> Option<usize> {
    board
        .empty_cells()
        .find(|&index| creates_fork(board, index, mark))
}

/// Every fork cell for `mark`, lowest index first.
pub fn fork_cells(board: &Board, mark: Mark) -> Vec<usize> {
    board
        .empty_cells()
        .filter(|&index| creates_fork(board, index, mark))
        .collect()
}
