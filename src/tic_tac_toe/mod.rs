//! Tic-Tac-Toe engine: win-line detection, the strategic heuristic player
//! and an exhaustive search.

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod mark;
pub mod rules;
pub mod state;
pub mod strategy;

pub use ai::{select_move, TicTacToeEvaluator, TicTacToeMove, TicTacToeMoveGenerator};
pub use board::Board;
pub use error::TicTacToeError;
pub use game::TicTacToeGame;
pub use mark::Mark;
pub use state::{Status, TicTacToeState};
