//! Move selection for the computer player.
//!
//! Easy and medium mix uniformly random cells into the strategic player.
//! Hard searches the game tree to the end, except on an empty board where it
//! sometimes plays the strategic opening to vary its games.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, Score, SearchContext,
};
use crate::difficulty::Difficulty;

use super::error::TicTacToeError;
use super::mark::Mark;
use super::state::TicTacToeState;
use super::strategy::strategic_move;

/// Chance that easy plays a random cell instead of the strategic one.
pub const EASY_RANDOM_PROBABILITY: f64 = 0.7;
/// Chance that medium plays a random cell instead of the strategic one.
pub const MEDIUM_RANDOM_PROBABILITY: f64 = 0.4;
/// Chance that hard opens with the strategic cell instead of the searched one.
pub const HARD_OPENING_STRATEGY_PROBABILITY: f64 = 0.3;

pub const WIN_SCORE: Score = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TicTacToeMove {
    pub mark: Mark,
    pub index: usize,
}

impl GameState for TicTacToeState {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.current_player().maximize_score()
    }
}

impl GameMove for TicTacToeMove {
    type State = TicTacToeState;
    type Error = TicTacToeError;

    fn apply(&self, state: &TicTacToeState) -> Result<TicTacToeState, TicTacToeError> {
        if state.current_player() != self.mark {
            return Err(TicTacToeError::NotYourTurn {
                mark: self.mark,
                turn: state.current_player(),
            });
        }
        state.apply_move(self.index)
    }
}

#[derive(Clone, Copy, Default)]
pub struct TicTacToeMoveGenerator;

impl MoveGenerator<TicTacToeState> for TicTacToeMoveGenerator {
    type Move = TicTacToeMove;

    fn generate_moves(&self, state: &TicTacToeState) -> Vec<TicTacToeMove> {
        let mark = state.current_player();
        state
            .legal_moves()
            .into_iter()
            .map(|index| TicTacToeMove { mark, index })
            .collect()
    }
}

/// +10 when X has won, -10 when O has, 0 otherwise.
#[derive(Clone, Copy, Default)]
pub struct TicTacToeEvaluator;

impl Evaluator<TicTacToeState> for TicTacToeEvaluator {
    fn evaluate(&self, state: &TicTacToeState) -> Score {
        match state.winner() {
            Some(Mark::X) => WIN_SCORE,
            Some(Mark::O) => -WIN_SCORE,
            None => 0,
        }
    }
}

/// The cell perfect play picks: a full-depth search, ties to the lowest index.
pub fn best_move(state: &TicTacToeState) -> Result<usize, TicTacToeError> {
    let depth = state.board().empty_count() as u8;
    let mut context = SearchContext::new(depth);
    let (best, score) = alpha_beta_search(
        &mut context,
        state,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
    )?;
    debug!(
        "searched {} positions, {} scores {}",
        context.searched_position_count(),
        best.index,
        score
    );
    Ok(best.index)
}

/// Picks the computer's cell for the side to move.
pub fn select_move<R>(
    state: &TicTacToeState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, TicTacToeError>
where
    R: Rng + ?Sized,
{
    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return Err(TicTacToeError::NoLegalMoves);
    }

    let board = state.board();
    let mark = state.current_player();
    let chosen = match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            let random_probability = if difficulty == Difficulty::Easy {
                EASY_RANDOM_PROBABILITY
            } else {
                MEDIUM_RANDOM_PROBABILITY
            };
            if rng.gen_bool(random_probability) {
                *candidates.choose(rng).ok_or(TicTacToeError::NoLegalMoves)?
            } else {
                strategic_move(board, mark, rng).ok_or(TicTacToeError::NoLegalMoves)?
            }
        }
        Difficulty::Hard => {
            if board.is_empty() && rng.gen_bool(HARD_OPENING_STRATEGY_PROBABILITY) {
                strategic_move(board, mark, rng).ok_or(TicTacToeError::NoLegalMoves)?
            } else {
                best_move(state)?
            }
        }
    };

    debug!("{} ({}) plays {}", mark, difficulty, chosen);
    Ok(chosen)
}
