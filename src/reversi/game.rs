use rand::Rng;

use crate::difficulty::Difficulty;

use super::ai::select_move;
use super::coord::Coord;
use super::error::ReversiError;
use super::state::{Outcome, ReversiState, Scores};

/// A Reversi game with its history. Every accepted move or pass pushes the
/// previous state so it can be taken back.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ReversiGame {
    state: ReversiState,
    history: Vec<ReversiState>,
}

impl ReversiGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ReversiState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &ReversiState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn legal_moves(&self) -> &[Coord] {
        self.state.legal_moves()
    }

    pub fn scores(&self) -> Scores {
        self.state.scores()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner()
    }

    pub fn must_pass(&self) -> bool {
        self.state.must_pass()
    }

    fn advance(&self, next: ReversiState) -> ReversiGame {
        let mut history = self.history.clone();
        history.push(self.state.clone());
        ReversiGame {
            state: next,
            history,
        }
    }

    pub fn apply_move(&self, coord: Coord) -> Result<ReversiGame, ReversiError> {
        Ok(self.advance(self.state.apply_move(coord)?))
    }

    pub fn pass_turn(&self) -> Result<ReversiGame, ReversiError> {
        Ok(self.advance(self.state.pass_turn()?))
    }

    /// Steps back one move or pass.
    pub fn undo(&self) -> Result<ReversiGame, ReversiError> {
        let mut history = self.history.clone();
        let state = history.pop().ok_or(ReversiError::NothingToUndo)?;
        Ok(ReversiGame { state, history })
    }

    pub fn select_ai_move<R>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Coord, ReversiError>
    where
        R: Rng + ?Sized,
    {
        select_move(&self.state, difficulty, rng)
    }
}
