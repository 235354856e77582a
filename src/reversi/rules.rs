//! Disc flipping and move legality.
//!
//! A move is legal when at least one direction holds a contiguous run of
//! opponent discs closed off by one of the mover's own discs. Playing the
//! move flips every such run.

use smallvec::SmallVec;

use super::board::Board;
use super::coord::Coord;
use super::error::ReversiError;
use super::player::Player;

/// (row, col) steps to the eight neighbours.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Discs flipped by one move. At most 18 can flip at once.
pub type FlipList = SmallVec<[Coord; 18]>;

/// Opponent discs that `player` would flip along one direction from `coord`.
pub fn flips_in_direction(
    board: &Board,
    coord: Coord,
    player: Player,
    direction: (i8, i8),
) -> FlipList {
    let opponent = player.opposite();
    let mut run = FlipList::new();
    let mut current = coord.step(direction);

    while let Some(cell) = current {
        match board.get(cell) {
            Some(disc) if disc == opponent => run.push(cell),
            Some(_) => return run,
            None => break,
        }
        current = cell.step(direction);
    }

    // ran off the board or into an empty cell before closing the run
    FlipList::new()
}

/// Every disc `player` would flip by playing `coord`. Empty when the move is
/// illegal, including when `coord` is occupied.
pub fn flips(board: &Board, coord: Coord, player: Player) -> FlipList {
    if !board.is_empty(coord) {
        return FlipList::new();
    }
    DIRECTIONS
        .iter()
        .flat_map(|&direction| flips_in_direction(board, coord, player, direction))
        .collect()
}

pub fn flip_count(board: &Board, coord: Coord, player: Player) -> usize {
    flips(board, coord, player).len()
}

pub fn is_legal_move(board: &Board, coord: Coord, player: Player) -> bool {
    board.is_empty(coord)
        && DIRECTIONS
            .iter()
            .any(|&direction| !flips_in_direction(board, coord, player, direction).is_empty())
}

/// Legal cells for `player` in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    Coord::all()
        .filter(|&coord| is_legal_move(board, coord, player))
        .collect()
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Coord::all().any(|coord| is_legal_move(board, coord, player))
}

/// Returns the board after `player` plays `coord`. The input is untouched.
pub fn place(board: &Board, coord: Coord, player: Player) -> Result<Board, ReversiError> {
    let flipped = flips(board, coord, player);
    if flipped.is_empty() {
        return Err(ReversiError::IllegalMove { coord, player });
    }

    let mut next = *board;
    next.set(coord, Some(player));
    for cell in flipped {
        next.set(cell, Some(player));
    }
    Ok(next)
}
