//! Watch command - watch the computer play against itself.

use ai_games::chess::ChessGame;
use ai_games::difficulty::Difficulty;
use ai_games::reversi::{Player, ReversiGame};
use ai_games::tic_tac_toe::{Mark, Status, TicTacToeGame};
use log::info;
use rand::rngs::StdRng;
use structopt::StructOpt;

use super::util::{create_rng, exit_with_error};
use super::{Command, GameKind};

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "chess")]
    pub game: GameKind,
    #[structopt(long, default_value = "medium", help = "Difficulty of the side moving first")]
    pub first: Difficulty,
    #[structopt(long, default_value = "medium", help = "Difficulty of the side moving second")]
    pub second: Difficulty,
    #[structopt(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,
    #[structopt(long, default_value = "200")]
    pub max_moves: usize,
}

impl Command for WatchArgs {
    fn execute(self) {
        info!("watching {} ({} vs {})", self.game, self.first, self.second);
        let mut rng = create_rng(self.seed);

        match self.game {
            GameKind::Chess => self.watch_chess(&mut rng),
            GameKind::Reversi => self.watch_reversi(&mut rng),
            GameKind::TicTacToe => self.watch_tic_tac_toe(&mut rng),
        }
    }
}

impl WatchArgs {
    fn difficulty_for(&self, moves_first: bool) -> Difficulty {
        if moves_first {
            self.first
        } else {
            self.second
        }
    }

    fn watch_chess(&self, rng: &mut StdRng) {
        let mut game = ChessGame::new();
        println!("{}\n", game.position());

        while !game.is_game_over() && game.history().len() < self.max_moves {
            let turn = game.turn();
            let difficulty = self.difficulty_for(turn.maximize_score());
            let chess_move = game
                .select_ai_move(difficulty, rng)
                .unwrap_or_else(|err| exit_with_error("failed to select a move", err));
            game = game
                .apply_chess_move(&chess_move)
                .unwrap_or_else(|err| exit_with_error("failed to apply the move", err));

            println!("{}. {} plays {}", game.history().len(), turn, chess_move);
            println!("{}\n", game.position());
        }

        if game.is_checkmate() {
            println!("checkmate");
        } else if game.is_stalemate() {
            println!("stalemate");
        }
        match game.winner() {
            Some(color) => println!("{} wins", color),
            None => println!("no winner after {} moves", game.history().len()),
        }
    }

    fn watch_reversi(&self, rng: &mut StdRng) {
        let mut game = ReversiGame::new();
        let mut turns = 0;
        println!("{}\n", game.state());

        while !game.is_game_over() && turns < self.max_moves {
            let player = game.state().current_player();
            turns += 1;

            if game.must_pass() {
                game = game
                    .pass_turn()
                    .unwrap_or_else(|err| exit_with_error("failed to pass", err));
                println!("{}. {} passes", turns, player);
                continue;
            }

            let difficulty = self.difficulty_for(player == Player::Black);
            let coord = game
                .select_ai_move(difficulty, rng)
                .unwrap_or_else(|err| exit_with_error("failed to select a move", err));
            game = game
                .apply_move(coord)
                .unwrap_or_else(|err| exit_with_error("failed to apply the move", err));

            println!("{}. {} plays {}", turns, player, coord);
            println!("{}\n", game.state());
        }

        match game.winner() {
            Some(outcome) => println!("{}", outcome),
            None => println!("unfinished after {} turns", turns),
        }
    }

    fn watch_tic_tac_toe(&self, rng: &mut StdRng) {
        let mut game = TicTacToeGame::new();

        while !game.state().is_game_over() && game.history().len() < self.max_moves {
            let mark = game.state().current_player();
            let difficulty = self.difficulty_for(mark == Mark::X);
            let index = game
                .select_ai_move(difficulty, rng)
                .unwrap_or_else(|err| exit_with_error("failed to select a move", err));
            game = game
                .apply_move(index)
                .unwrap_or_else(|err| exit_with_error("failed to apply the move", err));

            println!("{}. {} plays {}", game.history().len(), mark, index);
            println!("{}\n", game.state());
        }

        println!("{}", tic_tac_toe_result(&game));
    }
}

fn tic_tac_toe_result(game: &TicTacToeGame) -> String {
    match (game.status(), game.winner()) {
        (Status::Won, Some(mark)) => format!("{} wins", mark),
        (Status::Draw, _) => "draw".to_string(),
        _ => format!("unfinished after {} moves", game.history().len()),
    }
}
