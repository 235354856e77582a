//! Static evaluation of chess positions.
//!
//! Scores are from white's point of view: material plus a piece-square
//! bonus for every piece, plus a mobility term. Black's pieces read the same
//! bonus tables flipped top to bottom.

use crate::alpha_beta_searcher::Score;

use super::board::color::Color;
use super::board::piece::Piece;
use super::board::square::Square;
use super::board::Board;
use super::move_generator::pseudo_legal_move_count;

use self::evaluation_tables::bonus_table;

mod evaluation_tables;

/// Weight of each move of mobility advantage.
pub const MOBILITY_WEIGHT: Score = 10;

/// Returns the score of the board, positive when white is better.
pub fn score(board: &Board) -> Score {
    board_material_score(board) + mobility_score(board)
}

/// Returns the score from the perspective of `color`.
pub fn score_for(board: &Board, color: Color) -> Score {
    let score = score(board);
    match color {
        Color::White => score,
        Color::Black => -score,
    }
}

pub fn board_material_score(board: &Board) -> Score {
    board
        .occupied()
        .map(|(square, piece)| {
            let value = piece_score(piece, square);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Material value of `piece` plus its positional bonus on `square`.
pub fn piece_score(piece: Piece, square: Square) -> Score {
    piece.kind.material_value() + positional_bonus(piece, square)
}

fn positional_bonus(piece: Piece, square: Square) -> Score {
    let row = match piece.color {
        Color::White => 7 - square.rank(),
        Color::Black => square.rank(),
    };
    bonus_table(piece.kind)[row as usize][square.file() as usize]
}

fn mobility_score(board: &Board) -> Score {
    let white = pseudo_legal_move_count(board, Color::White) as Score;
    let black = pseudo_legal_move_count(board, Color::Black) as Score;
    (white - black) * MOBILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::board::piece::PieceKind;
    use crate::chess::board::square::*;
    use crate::chess_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(0, board_material_score(&board));
        assert_eq!(0, score(&board));
    }

    #[test]
    fn test_bonus_tables_mirror_between_colors() {
        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(320 - 50, piece_score(white_knight, A1));
        assert_eq!(320 + 20, piece_score(white_knight, D4));
        assert_eq!(piece_score(white_knight, F3), piece_score(black_knight, F6));

        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(100 + 50, piece_score(white_pawn, B7));
        assert_eq!(100 + 50, piece_score(black_pawn, B2));
        assert_eq!(100 - 20, piece_score(white_pawn, E2));
    }

    #[test]
    fn test_mobility_counts() {
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
        // queen 27 + king 5 against the lone king's 5
        assert_eq!(27 * MOBILITY_WEIGHT, mobility_score(&board));
        assert!(score(&board) > 900);
        assert_eq!(-score(&board), score_for(&board, Color::Black));
    }

    #[test]
    fn test_extra_material_favors_owner() {
        let board = chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBN.
        };
        assert!(score(&board) < -400);
    }
}
