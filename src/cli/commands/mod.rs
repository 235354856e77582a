//! CLI command implementations.

use std::fmt;
use std::str::FromStr;

pub trait Command {
    fn execute(self);
}

pub mod best_move;
pub mod watch;

// Shared utilities for commands
pub(crate) mod util;

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum GameKind {
    Chess,
    Reversi,
    TicTacToe,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game_str = match self {
            GameKind::Chess => "chess",
            GameKind::Reversi => "reversi",
            GameKind::TicTacToe => "tic-tac-toe",
        };
        write!(f, "{}", game_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for GameKind {
    type Err = ParseError;
    fn from_str(game: &str) -> Result<Self, Self::Err> {
        match game {
            "chess" => Ok(GameKind::Chess),
            "reversi" => Ok(GameKind::Reversi),
            "tic-tac-toe" => Ok(GameKind::TicTacToe),
            _ => Err("invalid game; options are: chess, reversi, tic-tac-toe"),
        }
    }
}
