//! Game-agnostic adversarial search shared by every engine in the crate.

mod search;
mod traits;

pub use search::{alpha_beta_search, minimax_search, SearchContext, SearchError};
pub use traits::{Evaluator, GameMove, GameState, MoveGenerator, Score, INFINITY};
