use rand::Rng;

use crate::difficulty::Difficulty;

use super::ai::select_move;
use super::error::TicTacToeError;
use super::mark::Mark;
use super::rules::Line;
use super::state::{Status, TicTacToeState};

/// A Tic-Tac-Toe game: the current state and the cells played, in order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TicTacToeGame {
    state: TicTacToeState,
    history: Vec<usize>,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TicTacToeState {
        &self.state
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.state.winner()
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.state.winning_line()
    }

    pub fn apply_move(&self, index: usize) -> Result<TicTacToeGame, TicTacToeError> {
        let state = self.state.apply_move(index)?;
        let mut history = self.history.clone();
        history.push(index);
        Ok(TicTacToeGame { state, history })
    }

    /// Clears the last cell played and gives the turn back to its owner.
    pub fn undo(&self) -> Result<TicTacToeGame, TicTacToeError> {
        let mut history = self.history.clone();
        let index = history.pop().ok_or(TicTacToeError::NothingToUndo)?;
        let mark = self
            .state
            .board()
            .get(index)?
            .ok_or(TicTacToeError::NothingToUndo)?;
        let board = self.state.board().cleared(index)?;
        Ok(TicTacToeGame {
            state: TicTacToeState::from_board(board, mark),
            history,
        })
    }

    pub fn select_ai_move<R>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<usize, TicTacToeError>
    where
        R: Rng + ?Sized,
    {
        select_move(&self.state, difficulty, rng)
    }
}
