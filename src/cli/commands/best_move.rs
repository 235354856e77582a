//! Best move command - print the computer's choice after a list of moves.

use ai_games::difficulty::Difficulty;
use log::info;
use structopt::StructOpt;

use super::util::{
    create_rng, exit_with_error, play_chess_moves, play_reversi_moves, play_tic_tac_toe_moves,
};
use super::{Command, GameKind};

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "chess")]
    pub game: GameKind,
    #[structopt(short, long, default_value = "hard")]
    pub difficulty: Difficulty,
    #[structopt(
        long,
        use_delimiter = true,
        help = "Comma separated moves played from the initial position"
    )]
    pub moves: Vec<String>,
    #[structopt(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut rng = create_rng(self.seed);
        info!("{} move after {:?}", self.game, self.moves);

        let best_move = match self.game {
            GameKind::Chess => {
                let game = play_chess_moves(&self.moves)
                    .unwrap_or_else(|err| exit_with_error("invalid move list", err));
                game.select_ai_move(self.difficulty, &mut rng)
                    .map(|chess_move| chess_move.to_uci())
                    .unwrap_or_else(|err| exit_with_error("failed to calculate best move", err))
            }
            GameKind::Reversi => {
                let game = play_reversi_moves(&self.moves)
                    .unwrap_or_else(|err| exit_with_error("invalid move list", err));
                if game.must_pass() {
                    "pass".to_string()
                } else {
                    game.select_ai_move(self.difficulty, &mut rng)
                        .map(|coord| coord.to_string())
                        .unwrap_or_else(|err| {
                            exit_with_error("failed to calculate best move", err)
                        })
                }
            }
            GameKind::TicTacToe => {
                let game = play_tic_tac_toe_moves(&self.moves)
                    .unwrap_or_else(|err| exit_with_error("invalid move list", err));
                game.select_ai_move(self.difficulty, &mut rng)
                    .map(|index| index.to_string())
                    .unwrap_or_else(|err| exit_with_error("failed to calculate best move", err))
            }
        };

        println!("{}", best_move);
    }
}
