//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Search scores. Positive values favor the maximizing player.
pub type Score = i32;

/// A score no real position reaches. Negate it for the minimizing bound.
pub const INFINITY: Score = Score::MAX;

/// Represents an immutable snapshot of a two-player zero-sum game.
pub trait GameState: Clone {
    /// Returns true if the player to move is the maximizing player.
    fn is_maximizing_player(&self) -> bool;
}

/// Represents an action that transitions one game state into the next.
///
/// Application never mutates its input: the search explores sibling branches
/// from the same parent, so every transition must hand back a fresh state.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Returns the state produced by playing this move on `state`.
    fn apply(&self, state: &Self::State) -> Result<Self::State, Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;

    /// Generates all legal moves for the player to move, in a stable order.
    fn generate_moves(&self, state: &S) -> Vec<Self::Move>;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState> {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S) -> Score;

    /// Scores a node where the player to move has no legal moves.
    /// Defaults to the static evaluation.
    fn evaluate_no_moves(&self, state: &S) -> Score {
        self.evaluate(state)
    }
}
