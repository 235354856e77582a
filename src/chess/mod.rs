//! Chess engine: board model, move generation with a self-check filter,
//! static evaluation and the computer opponent.

pub mod ai;
pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod move_generator;
pub mod position;

pub use ai::{select_move, ChessEvaluator, ChessMoveGenerator};
pub use board::color::Color;
pub use board::error::ChessError;
pub use board::piece::{Piece, PieceKind};
pub use board::square::Square;
pub use board::Board;
pub use chess_move::ChessMove;
pub use game::ChessGame;
pub use position::Position;
