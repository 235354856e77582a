//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "ai-games",
    about = "Chess, Reversi and Tic-Tac-Toe engines with a computer opponent"
)]
pub enum AiGames {
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. Pick the game with `--game` (default: chess) and each side's difficulty with `--first` and `--second` (default: medium). `--seed` makes the random choices repeatable and `--max-moves` (default: 200) stops long games."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the move the computer would choose at the given `--difficulty` (default: hard). The position is the initial one, after the optional `--moves` list (chess `e2e4`, Reversi `d3` or `pass`, Tic-Tac-Toe cell `0`-`8`)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for AiGames {
    fn execute(self) {
        match self {
            Self::Watch(cmd) => cmd.execute(),
            Self::BestMove(cmd) => cmd.execute(),
        }
    }
}
