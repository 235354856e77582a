//! Engines for three board games played against a computer opponent:
//! chess, Reversi and Tic-Tac-Toe.
//!
//! Each engine exposes immutable game states, legal move generation,
//! terminal detection and an AI that picks a move at a chosen difficulty.
//! The hard difficulty of every game runs the shared alpha-beta search.

pub mod alpha_beta_searcher;
pub mod chess;
pub mod difficulty;
pub mod reversi;
pub mod tic_tac_toe;

pub use difficulty::Difficulty;
