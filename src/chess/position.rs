use std::fmt;

use super::board::color::Color;
use super::board::error::ChessError;
use super::board::Board;
use super::chess_move::ChessMove;

/// Piece placement plus the side to move. This is the state the search
/// explores; game-level bookkeeping lives in `ChessGame`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    board: Board,
    turn: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Position {
    pub fn new(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    pub fn starting_position() -> Self {
        Self::new(Board::starting_position(), Color::White)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn with_turn(&self, turn: Color) -> Self {
        Self { turn, ..*self }
    }

    /// Plays `chess_move` and hands the turn over. Only checks that the move
    /// record matches the board; legality is the move generator's job.
    pub fn make_move(&self, chess_move: &ChessMove) -> Result<Position, ChessError> {
        Ok(Position {
            board: chess_move.apply(&self.board)?,
            turn: self.turn.opposite(),
        })
    }

    /// Takes back `chess_move`, which must be the last move played.
    pub fn unmake_move(&self, chess_move: &ChessMove) -> Result<Position, ChessError> {
        Ok(Position {
            board: chess_move.undo(&self.board)?,
            turn: chess_move.color(),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{} to move", self.board, self.turn)
    }
}
