use thiserror::Error;

use crate::alpha_beta_searcher::SearchError;

use super::mark::Mark;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("cell index {index} is off the board; cells are numbered 0-8")]
    InvalidIndex { index: usize },
    #[error("invalid cell {input:?}; cells are numbered 0-8")]
    InvalidCell { input: String },
    #[error("cell {index} is already taken")]
    CellOccupied { index: usize },
    #[error("it is {turn}'s turn, not {mark}'s")]
    NotYourTurn { mark: Mark, turn: Mark },
    #[error("invalid board {input:?}; expected nine of X, O or .")]
    InvalidBoard { input: String },
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("the game is already over")]
    GameOver,
    #[error("there is no move to undo")]
    NothingToUndo,
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
