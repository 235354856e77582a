use ai_games::alpha_beta_searcher::{alpha_beta_search, SearchContext};
use ai_games::chess::board::square::*;
use ai_games::chess::move_generator::legal_moves;
use ai_games::chess::{ChessEvaluator, ChessMoveGenerator, Position};
use ai_games::reversi::{ReversiEvaluator, ReversiMoveGenerator, ReversiState};
use ai_games::tic_tac_toe::{TicTacToeEvaluator, TicTacToeMoveGenerator, TicTacToeState};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("chess legal moves from the opening", |b| {
        b.iter(chess_opening_move_generation)
    });
    c.bench_function("chess alpha beta depth 3", |b| b.iter(chess_hard_search));
    c.bench_function("reversi alpha beta depth 3", |b| b.iter(reversi_hard_search));
    c.bench_function("tic-tac-toe full search", |b| {
        b.iter(tic_tac_toe_full_search)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn chess_opening_move_generation() {
    let position = Position::starting_position();
    assert_eq!(20, legal_moves(&position).len());
}

fn chess_hard_search() {
    let mut position = Position::starting_position();
    for (from, to) in [(E2, E4), (E7, E5), (G1, F3)] {
        let chess_move = legal_moves(&position)
            .into_iter()
            .find(|chess_move| chess_move.from_square() == from && chess_move.to_square() == to)
            .unwrap();
        position = position.make_move(&chess_move).unwrap();
    }

    let mut context = SearchContext::new(3);
    alpha_beta_search(&mut context, &position, &ChessMoveGenerator, &ChessEvaluator).unwrap();
}

fn reversi_hard_search() {
    let mut state = ReversiState::default();
    for cell in ["d3", "c3", "c4"] {
        state = state.apply_move(cell.parse().unwrap()).unwrap();
    }

    let mut context = SearchContext::new(3);
    alpha_beta_search(&mut context, &state, &ReversiMoveGenerator, &ReversiEvaluator).unwrap();
}

fn tic_tac_toe_full_search() {
    let state = TicTacToeState::new();
    let mut context = SearchContext::new(9);
    alpha_beta_search(
        &mut context,
        &state,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
    )
    .unwrap();
}
