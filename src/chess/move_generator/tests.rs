use super::*;
use crate::chess::board::piece::PieceKind;
use crate::chess::board::square::*;
use crate::chess_position;

fn play(position: Position, from: Square, to: Square) -> Position {
    let chess_move = legal_moves_from(position.board(), from)
        .into_iter()
        .find(|chess_move| chess_move.to_square() == to)
        .unwrap_or_else(|| panic!("{}{} should be legal", from, to));
    position.make_move(&chess_move).unwrap()
}

#[test]
fn test_starting_position_has_twenty_moves() {
    let position = Position::starting_position();
    assert_eq!(20, legal_moves(&position).len());
    assert_eq!(20, legal_moves(&position.with_turn(Color::Black)).len());
    assert_eq!(20, pseudo_legal_move_count(position.board(), Color::White));
}

#[test]
fn test_legal_moves_follow_board_order() {
    let position = Position::starting_position();
    let moves = legal_moves(&position);
    // b1 is the first square holding a piece with moves
    assert_eq!(B1, moves[0].from_square());
    assert_eq!(A3, moves[0].to_square());
    assert_eq!(H2, moves[moves.len() - 1].from_square());
    assert_eq!(H4, moves[moves.len() - 1].to_square());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut position = Position::starting_position();
    position = play(position, F2, F3);
    position = play(position, E7, E5);
    position = play(position, G2, G4);
    position = play(position, D8, H4);

    assert_eq!(Color::White, position.turn());
    assert!(is_in_check(position.board(), Color::White));
    assert!(is_checkmate(&position));
    assert!(!is_stalemate(&position));
    assert!(legal_moves(&position).is_empty());
}

#[test]
fn test_check_that_can_be_answered_is_not_mate() {
    let position = Position::new(
        chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K..r
        },
        Color::White,
    );
    assert!(is_in_check(position.board(), Color::White));
    assert!(!is_checkmate(&position));

    // every answer leaves the first rank or takes the rook
    for chess_move in legal_moves(&position) {
        let next = chess_move.apply(position.board()).unwrap();
        assert!(!is_in_check(&next, Color::White), "{}", chess_move);
    }
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let board = chess_position! {
        ....r..k
        ........
        ........
        ........
        ........
        ........
        ....B...
        ....K...
    };
    assert_eq!(9, pseudo_legal_moves_from(&board, E2).len());
    assert!(legal_moves_from(&board, E2).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = chess_position! {
        .......k
        ........
        ........
        ........
        ........
        ........
        ...r....
        ....K...
    };
    let destinations: Vec<Square> = legal_moves_from(&board, E1)
        .into_iter()
        .map(|chess_move| chess_move.to_square())
        .collect();
    // the rook covers the second rank and the d-file, capturing it is safe
    assert_eq!(vec![D2, F1], destinations);
}

#[test]
fn test_stalemate() {
    let position = Position::new(
        chess_position! {
            k.......
            ..Q.....
            .K......
            ........
            ........
            ........
            ........
            ........
        },
        Color::Black,
    );
    assert!(!is_in_check(position.board(), Color::Black));
    assert!(is_stalemate(&position));
    assert!(!is_checkmate(&position));
}

#[test]
fn test_is_square_attacked() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ...n....
        ........
        ....K...
    };
    assert!(is_square_attacked(&board, E1, Color::Black));
    assert!(!is_square_attacked(&board, E8, Color::White));
}

#[test]
fn test_castling_offered_through_attacked_square() {
    // f1 is covered by the bishop, castling is still generated
    let board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ......b.
        ....K..R
    };
    assert!(legal_moves_from(&board, E1)
        .iter()
        .any(|chess_move| chess_move.is_castling() && chess_move.to_square() == G1));
}

#[test]
fn test_promotion_moves_are_marked() {
    let board = chess_position! {
        ....k...
        ..P.....
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    let moves = legal_moves_from(&board, C7);
    assert_eq!(1, moves.len());
    assert_eq!(Some(PieceKind::Queen), moves[0].promotion());
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::starting_position();
    assert!(legal_moves_from(&board, E4).is_empty());
    assert!(!is_in_check(&Board::new(), Color::White));
}
