//! Legal move generation and the check/checkmate queries built on it.
//!
//! Legality works by replay: each pseudo-legal candidate is played on a
//! scratch board and rejected if any enemy piece can then reach the mover's
//! king. `is_square_attacked` regenerates enemy targets to answer that, which
//! makes the filter quadratic in the number of pieces. It is the dominant cost
//! of the chess engine.

pub mod targets;

use smallvec::SmallVec;

use super::board::color::Color;
use super::board::square::Square;
use super::board::Board;
use super::chess_move::ChessMove;
use super::position::Position;

pub use targets::{generate_targets, TargetList};

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

/// Returns true if any piece of color `by` has `square` among its targets.
///
/// `square` is expected to hold a piece of the other color. An empty square
/// would also count pawn pushes as attacks.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, _)| generate_targets(board, from).contains(&square))
}

/// Returns true if the king of `color` is attacked. A board without that king
/// is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

/// Moves for the piece on `from` that follow its movement pattern, whether
/// or not they leave its own king attacked.
pub fn pseudo_legal_moves_from(board: &Board, from: Square) -> ChessMoveList {
    let piece = match board.get(from) {
        Some(piece) => piece,
        None => return ChessMoveList::new(),
    };

    generate_targets(board, from)
        .into_iter()
        .map(|to| ChessMove::for_piece(board, from, piece, to))
        .collect()
}

/// Moves for the piece on `from` that do not leave its own king attacked.
/// Whose turn it is does not matter here; an empty square has no moves.
pub fn legal_moves_from(board: &Board, from: Square) -> ChessMoveList {
    pseudo_legal_moves_from(board, from)
        .into_iter()
        .filter(|chess_move| leaves_king_safe(board, chess_move))
        .collect()
}

fn leaves_king_safe(board: &Board, chess_move: &ChessMove) -> bool {
    match chess_move.apply(board) {
        Ok(next) => !is_in_check(&next, chess_move.color()),
        Err(_) => false,
    }
}

/// All legal moves for the side to move, origin squares in a1..h8 order.
pub fn legal_moves(position: &Position) -> ChessMoveList {
    let board = position.board();
    board
        .pieces(position.turn())
        .flat_map(|(from, _)| legal_moves_from(board, from))
        .collect()
}

/// Number of pseudo-legal moves available to `color`. Used as the mobility
/// term of the evaluation, where the full legality filter is too costly.
pub fn pseudo_legal_move_count(board: &Board, color: Color) -> usize {
    board
        .pieces(color)
        .map(|(from, _)| generate_targets(board, from).len())
        .sum()
}

pub fn has_legal_move(position: &Position) -> bool {
    let board = position.board();
    board
        .pieces(position.turn())
        .any(|(from, _)| !legal_moves_from(board, from).is_empty())
}

/// The side to move is in check and nothing gets it out.
pub fn is_checkmate(position: &Position) -> bool {
    is_in_check(position.board(), position.turn()) && !has_legal_move(position)
}

pub fn is_stalemate(position: &Position) -> bool {
    !is_in_check(position.board(), position.turn()) && !has_legal_move(position)
}

#[cfg(test)]
mod tests;
