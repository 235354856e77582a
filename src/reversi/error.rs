use thiserror::Error;

use crate::alpha_beta_searcher::SearchError;

use super::coord::Coord;
use super::player::Player;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReversiError {
    #[error("invalid cell {input:?}; cells are a column a-h followed by a row 1-8")]
    InvalidCell { input: String },
    #[error("row {row}, column {col} is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("{player} cannot play {coord}")]
    IllegalMove { coord: Coord, player: Player },
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("{player} has a legal move and cannot pass")]
    CannotPass { player: Player },
    #[error("the game is already over")]
    GameOver,
    #[error("there is no move to undo")]
    NothingToUndo,
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
