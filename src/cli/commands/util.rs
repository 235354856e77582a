//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::process;

use ai_games::chess::{ChessError, ChessGame, Square};
use ai_games::reversi::{ReversiError, ReversiGame};
use ai_games::tic_tac_toe::board::parse_index;
use ai_games::tic_tac_toe::{TicTacToeError, TicTacToeGame};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Prints the error and exits with a failure status.
pub(crate) fn exit_with_error<E: Display>(context: &str, error: E) -> ! {
    eprintln!("{}: {}", context, error);
    process::exit(1);
}

/// Splits a move like `e2e4` into its squares. A trailing `q`, as printed
/// for promotions, is accepted since pawns always promote to a queen.
pub(crate) fn parse_chess_move(text: &str) -> Result<(Square, Square), ChessError> {
    let invalid = || ChessError::InvalidSquare {
        input: text.to_string(),
    };
    let squares = text.strip_suffix('q').unwrap_or(text);
    if squares.len() != 4 {
        return Err(invalid());
    }
    let from: Square = squares.get(0..2).ok_or_else(invalid)?.parse()?;
    let to: Square = squares.get(2..4).ok_or_else(invalid)?.parse()?;
    Ok((from, to))
}

/// Plays moves written as origin and destination squares, e.g. `e2e4`.
pub(crate) fn play_chess_moves(moves: &[String]) -> Result<ChessGame, ChessError> {
    let mut game = ChessGame::new();
    for text in moves {
        let (from, to) = parse_chess_move(text)?;
        game = game.apply_move(from, to)?;
    }
    Ok(game)
}

/// Plays cells such as `d3`. `pass` hands the turn over.
pub(crate) fn play_reversi_moves(moves: &[String]) -> Result<ReversiGame, ReversiError> {
    let mut game = ReversiGame::new();
    for text in moves {
        game = if text == "pass" {
            game.pass_turn()?
        } else {
            game.apply_move(text.parse()?)?
        };
    }
    Ok(game)
}

/// Plays cell indexes 0-8.
pub(crate) fn play_tic_tac_toe_moves(moves: &[String]) -> Result<TicTacToeGame, TicTacToeError> {
    let mut game = TicTacToeGame::new();
    for text in moves {
        game = game.apply_move(parse_index(text)?)?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_games::chess::board::square::{A7, B8, E2, E4};
    use ai_games::chess::PieceKind;

    #[test]
    fn test_parse_chess_move() {
        assert_eq!(Ok((E2, E4)), parse_chess_move("e2e4"));
        assert_eq!(Ok((A7, B8)), parse_chess_move("a7b8q"));
        assert!(parse_chess_move("e2e").is_err());
        assert!(parse_chess_move("e2e4n").is_err());
    }

    #[test]
    fn test_promotion_output_can_be_replayed() {
        let moves: Vec<String> = [
            "h2h4", "g7g5", "h4g5", "h7h6", "g5h6", "a7a6", "h6h7", "a6a5", "h7g8q",
        ]
        .iter()
        .map(|text| text.to_string())
        .collect();
        let game = play_chess_moves(&moves).unwrap();

        let promotion = game.last_move().unwrap();
        assert_eq!("h7g8q", promotion.to_uci());
        assert_eq!(Some(PieceKind::Queen), promotion.promotion());
    }
}
