//! Move selection for the computer player.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, Score, SearchContext,
};
use crate::difficulty::Difficulty;

use super::coord::Coord;
use super::error::ReversiError;
use super::evaluate;
use super::rules::flip_count;
use super::state::ReversiState;

/// Plies searched on hard, counting the computer's own move.
pub const HARD_SEARCH_DEPTH: u8 = 3;

impl GameState for ReversiState {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.current_player().maximize_score()
    }
}

impl GameMove for Coord {
    type State = ReversiState;
    type Error = ReversiError;

    fn apply(&self, state: &ReversiState) -> Result<ReversiState, ReversiError> {
        state.apply_move(*self)
    }
}

#[derive(Clone, Copy, Default)]
pub struct ReversiMoveGenerator;

impl MoveGenerator<ReversiState> for ReversiMoveGenerator {
    type Move = Coord;

    fn generate_moves(&self, state: &ReversiState) -> Vec<Coord> {
        state.legal_moves().to_vec()
    }
}

/// Scores with the positional weight table. A node where the side to move
/// has to pass is scored the same way.
#[derive(Clone, Copy, Default)]
pub struct ReversiEvaluator;

impl Evaluator<ReversiState> for ReversiEvaluator {
    #[inline]
    fn evaluate(&self, state: &ReversiState) -> Score {
        evaluate::score(state.board())
    }
}

/// Picks the computer's cell for the side to move.
pub fn select_move<R>(
    state: &ReversiState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Coord, ReversiError>
where
    R: Rng + ?Sized,
{
    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return Err(ReversiError::NoLegalMoves);
    }

    let chosen = match difficulty {
        Difficulty::Easy => *candidates.choose(rng).ok_or(ReversiError::NoLegalMoves)?,
        Difficulty::Medium => most_flips(state, candidates).ok_or(ReversiError::NoLegalMoves)?,
        Difficulty::Hard => {
            let mut context = SearchContext::new(HARD_SEARCH_DEPTH);
            let (best_move, score) =
                alpha_beta_search(&mut context, state, &ReversiMoveGenerator, &ReversiEvaluator)?;
            debug!(
                "searched {} positions, score {}",
                context.searched_position_count(),
                score
            );
            best_move
        }
    };

    debug!("{} ({}) plays {}", state.current_player(), difficulty, chosen);
    Ok(chosen)
}

/// The cell flipping the most discs. Ties go to the earliest cell.
fn most_flips(state: &ReversiState, candidates: &[Coord]) -> Option<Coord> {
    let player = state.current_player();
    let mut best: Option<(Coord, usize)> = None;
    for &candidate in candidates {
        let flips = flip_count(state.board(), candidate, player);
        if best.map_or(true, |(_, best_flips)| flips > best_flips) {
            best = Some((candidate, flips));
        }
    }
    best.map(|(coord, _)| coord)
}
