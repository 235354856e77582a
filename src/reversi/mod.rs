//! Reversi engine: disc flipping rules, pass handling and the computer
//! opponent.

pub mod ai;
pub mod board;
pub mod coord;
pub mod error;
pub mod evaluate;
pub mod game;
pub mod player;
pub mod rules;
pub mod state;

pub use ai::{select_move, ReversiEvaluator, ReversiMoveGenerator};
pub use board::Board;
pub use coord::Coord;
pub use error::ReversiError;
pub use game::ReversiGame;
pub use player::Player;
pub use state::{Outcome, ReversiState, Scores};
