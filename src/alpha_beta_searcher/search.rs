//! Fixed-depth alpha-beta search.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once `beta <= alpha` at a node, the remaining
//! siblings cannot change the result and are skipped. The algorithm returns the same root score
//! and the same root move as plain minimax, which is kept alongside it as `minimax_search` so the
//! equivalence can be checked.
//!
//! # Move Selection
//!
//! Moves are searched in generator order. A later move only replaces the current best when its
//! score is strictly better, so ties resolve to the first move generated.
//!
//! There are no transposition tables, no move ordering heuristics and no iterative deepening:
//! every call explores the tree to exactly the configured depth and runs to completion.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::{debug, trace};
use thiserror::Error;

use super::{Evaluator, GameMove, GameState, MoveGenerator, Score, INFINITY};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("generated move could not be applied: {0}")]
    MoveApplication(String),
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    cutoff_count: usize,
    last_score: Option<Score>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: Score, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig { depth },
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

fn apply_move<M: GameMove>(game_move: &M, state: &M::State) -> Result<M::State, SearchError> {
    game_move
        .apply(state)
        .map_err(|err| SearchError::MoveApplication(format!("{:?}: {:?}", game_move, err)))
}

/// Updates best score and move if new score is strictly better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: Score,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut Score,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = best_move.is_none()
        || if maximizing_player {
            score > *best_score
        } else {
            score < *best_score
        };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Searches for the best move using alpha-beta pruning to the context's depth.
///
/// # Returns
///
/// - `Ok((best_move, score))` - The best move and its backed-up score
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If no legal moves are available
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
) -> Result<(G::Move, Score), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    search_root(context, state, move_generator, evaluator, true)
}

/// Exhaustive minimax to the context's depth, without pruning.
///
/// Visits every node, so it is only practical for small trees. Returns the same
/// move and score as `alpha_beta_search`.
pub fn minimax_search<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
) -> Result<(G::Move, Score), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    search_root(context, state, move_generator, evaluator, false)
}

fn search_root<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    prune: bool,
) -> Result<(G::Move, Score), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let depth = context.search_depth();
    debug!("search depth: {} (pruning: {})", depth, prune);

    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let maximizing_player = state.is_maximizing_player();
    let mut best_score = if maximizing_player { -INFINITY } else { INFINITY };
    let mut best_move = None;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;

    for game_move in candidates.iter() {
        let child = apply_move(game_move, state)?;
        let score = if prune {
            alpha_beta(context, &child, move_generator, evaluator, depth - 1, alpha, beta)?
        } else {
            minimax(context, &child, move_generator, evaluator, depth - 1)?
        };
        trace!("root move {:?} scored {}", game_move, score);

        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if prune {
            if maximizing_player {
                alpha = max(alpha, best_score);
            } else {
                beta = min(beta, best_score);
            }
        }
    }

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
    context.stats.record_result(best_score, start.elapsed());
    debug!(
        "best move {:?} (score {}, {} positions, {} cutoffs)",
        best_move,
        best_score,
        context.searched_position_count(),
        context.cutoff_count()
    );

    Ok((best_move, best_score))
}

fn alpha_beta<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
) -> Result<Score, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.stats.position_count += 1;

    if depth == 0 {
        return Ok(evaluator.evaluate(state));
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Ok(evaluator.evaluate_no_moves(state));
    }

    let maximizing_player = state.is_maximizing_player();
    let mut best_score = if maximizing_player { -INFINITY } else { INFINITY };

    for game_move in candidates.iter() {
        let child = apply_move(game_move, state)?;
        let score = alpha_beta(
            context,
            &child,
            move_generator,
            evaluator,
            depth - 1,
            alpha,
            beta,
        )?;

        if maximizing_player {
            best_score = max(best_score, score);
            alpha = max(alpha, best_score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, best_score);
        }

        if beta <= alpha {
            context.stats.cutoff_count += 1;
            break;
        }
    }

    Ok(best_score)
}

fn minimax<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    depth: u8,
) -> Result<Score, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.stats.position_count += 1;

    if depth == 0 {
        return Ok(evaluator.evaluate(state));
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Ok(evaluator.evaluate_no_moves(state));
    }

    let maximizing_player = state.is_maximizing_player();
    let mut best_score = if maximizing_player { -INFINITY } else { INFINITY };

    for game_move in candidates.iter() {
        let child = apply_move(game_move, state)?;
        let score = minimax(context, &child, move_generator, evaluator, depth - 1)?;
        best_score = if maximizing_player {
            max(best_score, score)
        } else {
            min(best_score, score)
        };
    }

    Ok(best_score)
}
