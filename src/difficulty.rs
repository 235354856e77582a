use std::fmt;
use std::str::FromStr;

/// How hard the scripted opponent plays.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let difficulty_str = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", difficulty_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Difficulty {
    type Err = ParseError;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("invalid difficulty; options are: easy, medium, hard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty,
                Difficulty::from_str(&difficulty.to_string()).unwrap()
            );
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Ok(Difficulty::Hard), Difficulty::from_str("Hard"));
        assert_eq!(Ok(Difficulty::Easy), Difficulty::from_str("EASY"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Difficulty::from_str("impossible").is_err());
    }
}
