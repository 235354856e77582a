//! Pseudo-legal destinations for a single piece.
//!
//! Nothing here looks at whether the mover's king ends up attacked; that
//! filter is applied by the legal move generator on top of these targets.

use smallvec::SmallVec;

use crate::chess::board::color::Color;
use crate::chess::board::piece::{Piece, PieceKind};
use crate::chess::board::square::Square;
use crate::chess::board::Board;

/// Destination squares for one piece. A queen in the open has 27.
pub type TargetList = SmallVec<[Square; 32]>;

// (file, rank) offsets
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ORTHOGONALS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

const KING_HOME_FILE: u8 = 4;

/// Generates every pseudo-legal destination of the piece on `from`.
/// An empty square has no targets.
pub fn generate_targets(board: &Board, from: Square) -> TargetList {
    let mut targets = TargetList::new();
    let piece = match board.get(from) {
        Some(piece) => piece,
        None => return targets,
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_targets(&mut targets, board, from, piece.color),
        PieceKind::Knight => {
            generate_step_targets(&mut targets, board, from, piece.color, &KNIGHT_OFFSETS)
        }
        PieceKind::Bishop => {
            generate_ray_targets(&mut targets, board, from, piece.color, &DIAGONALS)
        }
        PieceKind::Rook => {
            generate_ray_targets(&mut targets, board, from, piece.color, &ORTHOGONALS)
        }
        PieceKind::Queen => {
            generate_ray_targets(&mut targets, board, from, piece.color, &DIAGONALS);
            generate_ray_targets(&mut targets, board, from, piece.color, &ORTHOGONALS);
        }
        PieceKind::King => {
            generate_step_targets(&mut targets, board, from, piece.color, &KING_OFFSETS);
            generate_castle_targets(&mut targets, board, from, piece);
        }
    }

    targets
}

fn is_enemy(board: &Board, square: Square, color: Color) -> bool {
    matches!(board.get(square), Some(piece) if piece.color != color)
}

fn generate_pawn_targets(targets: &mut TargetList, board: &Board, from: Square, color: Color) {
    let forward = color.forward();

    if let Some(single) = from.offset(0, forward) {
        if !board.is_occupied(single) {
            targets.push(single);

            if from.rank() == color.pawn_rank() {
                if let Some(double) = single.offset(0, forward) {
                    if !board.is_occupied(double) {
                        targets.push(double);
                    }
                }
            }
        }
    }

    // diagonal moves only ever capture
    for file_delta in [-1, 1] {
        if let Some(capture) = from.offset(file_delta, forward) {
            if is_enemy(board, capture, color) {
                targets.push(capture);
            }
        }
    }
}

fn generate_step_targets(
    targets: &mut TargetList,
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            match board.get(to) {
                Some(piece) if piece.color == color => {}
                _ => targets.push(to),
            }
        }
    }
}

fn generate_ray_targets(
    targets: &mut TargetList,
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) {
    for &(file_delta, rank_delta) in directions {
        let mut current = from;
        while let Some(to) = current.offset(file_delta, rank_delta) {
            match board.get(to) {
                None => targets.push(to),
                Some(piece) => {
                    if piece.color != color {
                        targets.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Castling is offered when the king and the rook are unmoved and every square
/// between them is empty. Attacked transit squares are not considered.
fn generate_castle_targets(targets: &mut TargetList, board: &Board, from: Square, king: Piece) {
    let rank = king.color.back_rank();
    if king.has_moved || from.rank() != rank || from.file() != KING_HOME_FILE {
        return;
    }

    // (rook file, files that must be empty, king destination file)
    let sides: [(u8, &[u8], u8); 2] = [(7, &[5, 6], 6), (0, &[1, 2, 3], 2)];

    for (rook_file, between, destination_file) in sides {
        let rook_ready = Square::new(rook_file, rank)
            .and_then(|square| board.get(square))
            .map_or(false, |rook| {
                rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
            });
        let path_clear = between.iter().all(|&file| {
            Square::new(file, rank).map_or(false, |square| !board.is_occupied(square))
        });

        if rook_ready && path_clear {
            if let Some(destination) = Square::new(destination_file, rank) {
                targets.push(destination);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::board::square::*;
    use crate::chess_position;

    fn sorted(targets: TargetList) -> Vec<Square> {
        let mut targets = targets.into_vec();
        targets.sort();
        targets
    }

    #[test]
    fn test_pawn_single_and_double_advance() {
        let board = Board::starting_position();
        assert_eq!(vec![E3, E4], sorted(generate_targets(&board, E2)));
        assert_eq!(vec![E5, E6], sorted(generate_targets(&board, E7)));
    }

    #[test]
    fn test_pawn_blocked_and_captures() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ...pn...
            ....P...
            ....K...
        };
        // blocked ahead, captures only the occupied enemy diagonal
        assert_eq!(vec![D3], sorted(generate_targets(&board, E2)));
    }

    #[test]
    fn test_pawn_double_advance_needs_both_squares_empty() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ....n...
            ........
            ....P...
            ....K...
        };
        assert_eq!(vec![E3], sorted(generate_targets(&board, E2)));
    }

    #[test]
    fn test_knight_targets_skip_own_pieces() {
        let board = Board::starting_position();
        assert_eq!(vec![F3, H3], sorted(generate_targets(&board, G1)));
    }

    #[test]
    fn test_rook_rays_stop_at_blockers() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ........
            ........
            ........
            ...R..PK
        };
        assert_eq!(
            vec![A1, B1, C1, E1, F1, D2, D3, D4, D5],
            sorted(generate_targets(&board, D1))
        );
    }

    #[test]
    fn test_queen_is_bishop_plus_rook() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ...Q....
            ........
            ........
            ....K...
        };
        assert_eq!(27, generate_targets(&board, D4).len());
    }

    #[test]
    fn test_castle_targets() {
        let board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        assert_eq!(
            vec![C1, D1, F1, G1, D2, E2, F2],
            sorted(generate_targets(&board, E1))
        );
        assert_eq!(
            vec![D7, E7, F7, C8, D8, F8, G8],
            sorted(generate_targets(&board, E8))
        );
    }

    #[test]
    fn test_castle_blocked_or_moved() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            RN..K..R
        };
        let rook = board.remove(H1).unwrap();
        board.set(H1, Some(rook.moved()));

        // queenside blocked by the knight, kingside rook has moved
        assert_eq!(
            vec![D1, F1, D2, E2, F2],
            sorted(generate_targets(&board, E1))
        );
    }

    #[test]
    fn test_empty_square_has_no_targets() {
        let board = Board::starting_position();
        assert!(generate_targets(&board, E4).is_empty());
    }
}
