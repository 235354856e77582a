use std::fmt;
use std::str::FromStr;

/// One side of a Reversi game. Black moves first.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// White's discs count positive in the evaluation.
    pub fn maximize_score(&self) -> bool {
        matches!(self, Player::White)
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Black => "black",
            Player::White => "white",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            _ => Err("invalid player; options are: black, white"),
        }
    }
}
