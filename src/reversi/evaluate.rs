use crate::alpha_beta_searcher::Score;

use super::board::Board;
use super::coord::BOARD_SIZE;
use super::player::Player;

// Corners are worth the most. The cells that hand a corner to the opponent
// are the worst.
#[rustfmt::skip]
pub const WEIGHTS: [[Score; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20,  20,   5,   5,  20, -20, 120],
    [-20, -40,  -5,  -5,  -5,  -5, -40, -20],
    [ 20,  -5,  15,   3,   3,  15,  -5,  20],
    [  5,  -5,   3,   3,   3,   3,  -5,   5],
    [  5,  -5,   3,   3,   3,   3,  -5,   5],
    [ 20,  -5,  15,   3,   3,  15,  -5,  20],
    [-20, -40,  -5,  -5,  -5,  -5, -40, -20],
    [120, -20,  20,   5,   5,  20, -20, 120],
];

/// Positional score of the board, positive when white is better.
pub fn score(board: &Board) -> Score {
    board
        .discs()
        .map(|(coord, player)| {
            let weight = WEIGHTS[coord.row()][coord.col()];
            match player {
                Player::White => weight,
                Player::Black => -weight,
            }
        })
        .sum()
}
