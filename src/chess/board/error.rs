use thiserror::Error;

use crate::alpha_beta_searcher::SearchError;

use super::color::Color;
use super::square::Square;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square {input:?}; squares are a file a-h followed by a rank 1-8")]
    InvalidSquare { input: String },
    #[error("cannot put a piece on {square}, it is already occupied")]
    SquareOccupied { square: Square },
    #[error("there is no piece on {square}")]
    EmptySquare { square: Square },
    #[error("the piece on {square} belongs to {color}, but it is {turn}'s turn")]
    NotYourPiece {
        square: Square,
        color: Color,
        turn: Color,
    },
    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },
    #[error("the move record does not match the board: {msg}")]
    MoveMismatch { msg: &'static str },
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("the game is already over")]
    GameOver,
    #[error("there is no move to undo")]
    NothingToUndo,
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
