use std::fmt;

use super::board::Board;
use super::error::TicTacToeError;
use super::mark::Mark;
use super::rules::{self, Line};

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Draw,
}

/// A Tic-Tac-Toe position with its outcome worked out.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub struct TicTacToeState {
    board: Board,
    current_player: Mark,
    status: Status,
    winning_line: Option<(Mark, Line)>,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::from_board(Board::new(), Mark::X)
    }
}

impl TicTacToeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board, current_player: Mark) -> Self {
        let winning_line = rules::winning_line(&board);
        let status = if winning_line.is_some() {
            Status::Won
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::Playing
        };
        Self {
            board,
            current_player,
            status,
            winning_line,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line.map(|(mark, _)| mark)
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line.map(|(_, line)| line)
    }

    pub fn is_game_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// Empty cells while the game is on, nothing once it is decided.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// Puts the side to move's mark on `index` and passes the turn.
    pub fn apply_move(&self, index: usize) -> Result<TicTacToeState, TicTacToeError> {
        if self.is_game_over() {
            return Err(TicTacToeError::GameOver);
        }
        let board = self.board.placed(index, self.current_player)?;
        Ok(Self::from_board(board, self.current_player.opposite()))
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.status {
            Status::Playing => write!(f, "{} to move", self.current_player),
            Status::Won => match self.winner() {
                Some(mark) => write!(f, "{} wins", mark),
                None => write!(f, "won"),
            },
            Status::Draw => write!(f, "draw"),
        }
    }
}
