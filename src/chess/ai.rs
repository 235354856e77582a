//! Move selection for the computer player, plus the chess implementation of
//! the alpha-beta search traits.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, Score, SearchContext,
    INFINITY,
};
use crate::difficulty::Difficulty;

use super::board::error::ChessError;
use super::chess_move::ChessMove;
use super::evaluate;
use super::move_generator::legal_moves;
use super::position::Position;

/// Plies searched on hard, counting the computer's own move.
pub const HARD_SEARCH_DEPTH: u8 = 3;

impl GameState for Position {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.turn().maximize_score()
    }
}

impl GameMove for ChessMove {
    type State = Position;
    type Error = ChessError;

    #[inline]
    fn apply(&self, state: &Position) -> Result<Position, ChessError> {
        state.make_move(self)
    }
}

#[derive(Clone, Copy, Default)]
pub struct ChessMoveGenerator;

impl MoveGenerator<Position> for ChessMoveGenerator {
    type Move = ChessMove;

    fn generate_moves(&self, state: &Position) -> Vec<ChessMove> {
        legal_moves(state).into_vec()
    }
}

#[derive(Clone, Copy, Default)]
pub struct ChessEvaluator;

impl Evaluator<Position> for ChessEvaluator {
    #[inline]
    fn evaluate(&self, state: &Position) -> Score {
        evaluate::score(state.board())
    }

    /// A side without moves has lost, stalemate included.
    fn evaluate_no_moves(&self, state: &Position) -> Score {
        if state.is_maximizing_player() {
            -INFINITY
        } else {
            INFINITY
        }
    }
}

/// Searches for the best move from `position` to the given depth.
pub fn search_best_move(
    context: &mut SearchContext,
    position: &Position,
) -> Result<ChessMove, ChessError> {
    let (best_move, _) =
        alpha_beta_search(context, position, &ChessMoveGenerator, &ChessEvaluator)?;
    Ok(best_move)
}

/// Picks the computer's move for the side to move.
///
/// Fails with `NoLegalMoves` on a checkmated or stalemated position; callers
/// are expected to check for the end of the game first.
pub fn select_move<R>(
    position: &Position,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<ChessMove, ChessError>
where
    R: Rng + ?Sized,
{
    let candidates = legal_moves(position);
    if candidates.is_empty() {
        return Err(ChessError::NoLegalMoves);
    }

    let chosen = match difficulty {
        Difficulty::Easy => *candidates.choose(rng).ok_or(ChessError::NoLegalMoves)?,
        Difficulty::Medium => best_one_ply_move(position, &candidates)?,
        Difficulty::Hard => {
            let mut context = SearchContext::new(HARD_SEARCH_DEPTH);
            search_best_move(&mut context, position)?
        }
    };

    debug!("{} ({}) plays {}", position.turn(), difficulty, chosen);
    Ok(chosen)
}

/// The move whose resulting position evaluates best for the mover. Ties go to
/// the move generated first.
fn best_one_ply_move(
    position: &Position,
    candidates: &[ChessMove],
) -> Result<ChessMove, ChessError> {
    let mover = position.turn();
    let mut best: Option<(ChessMove, Score)> = None;

    for candidate in candidates {
        let next = position.make_move(candidate)?;
        let score = evaluate::score_for(next.board(), mover);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*candidate, score));
        }
    }

    best.map(|(chess_move, _)| chess_move)
        .ok_or(ChessError::NoLegalMoves)
}
