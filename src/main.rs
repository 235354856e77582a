mod cli;

use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::AiGames;

fn main() {
    env_logger::init();
    AiGames::from_args().execute();
}
