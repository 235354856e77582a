use std::fmt;

use super::board::Board;
use super::coord::Coord;
use super::error::ReversiError;
use super::player::Player;
use super::rules;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, Default)]
pub struct Scores {
    pub black: usize,
    pub white: usize,
}

/// A Reversi position: the board, the side to move, running disc counts, the
/// last cell played and the legal moves of the side to move.
///
/// When the side to move has no legal move the turn does not pass by itself;
/// `must_pass` reports it and `pass_turn` hands the move over.
#[derive(Clone, PartialEq, Debug, Eq)]
pub struct ReversiState {
    board: Board,
    current_player: Player,
    scores: Scores,
    last_move: Option<Coord>,
    legal_moves: Vec<Coord>,
}

impl Default for ReversiState {
    fn default() -> Self {
        Self::new(Board::starting_position(), Player::Black)
    }
}

impl ReversiState {
    pub fn new(board: Board, current_player: Player) -> Self {
        Self::with_last_move(board, current_player, None)
    }

    fn with_last_move(board: Board, current_player: Player, last_move: Option<Coord>) -> Self {
        Self {
            scores: Scores {
                black: board.count(Player::Black),
                white: board.count(Player::White),
            },
            legal_moves: rules::legal_moves(&board, current_player),
            board,
            current_player,
            last_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Legal cells for the side to move, in row-major order.
    pub fn legal_moves(&self) -> &[Coord] {
        &self.legal_moves
    }

    pub fn is_legal_move(&self, coord: Coord) -> bool {
        self.legal_moves.contains(&coord)
    }

    /// Plays `coord` for the side to move and hands the turn to the opponent.
    pub fn apply_move(&self, coord: Coord) -> Result<ReversiState, ReversiError> {
        if !self.is_legal_move(coord) {
            if self.is_game_over() {
                return Err(ReversiError::GameOver);
            }
            return Err(ReversiError::IllegalMove {
                coord,
                player: self.current_player,
            });
        }

        let board = rules::place(&self.board, coord, self.current_player)?;
        Ok(Self::with_last_move(
            board,
            self.current_player.opposite(),
            Some(coord),
        ))
    }

    /// The side to move has nothing to play but the game goes on.
    pub fn must_pass(&self) -> bool {
        self.legal_moves.is_empty()
            && rules::has_legal_move(&self.board, self.current_player.opposite())
    }

    pub fn pass_turn(&self) -> Result<ReversiState, ReversiError> {
        if self.is_game_over() {
            return Err(ReversiError::GameOver);
        }
        if !self.legal_moves.is_empty() {
            return Err(ReversiError::CannotPass {
                player: self.current_player,
            });
        }
        Ok(Self::with_last_move(
            self.board,
            self.current_player.opposite(),
            self.last_move,
        ))
    }

    /// Neither side can move.
    pub fn is_game_over(&self) -> bool {
        self.legal_moves.is_empty()
            && !rules::has_legal_move(&self.board, self.current_player.opposite())
    }

    /// The result once the game is over: more discs wins, equal counts draw.
    pub fn winner(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        let Scores { black, white } = self.scores;
        Some(if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        })
    }
}

impl fmt::Display for ReversiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nblack {} - white {}, {} to move",
            self.board, self.scores.black, self.scores.white, self.current_player
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(text: &str) -> Coord {
        text.parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = ReversiState::default();
        assert_eq!(Player::Black, state.current_player());
        assert_eq!(Scores { black: 2, white: 2 }, state.scores());
        assert_eq!(4, state.legal_moves().len());
        assert_eq!(None, state.last_move());
        assert!(!state.is_game_over());
        assert_eq!(None, state.winner());
    }

    #[test]
    fn test_apply_move() {
        let state = ReversiState::default();
        let before = state.clone();

        let next = state.apply_move(coord("d3")).unwrap();

        assert_eq!(before, state);
        assert_eq!(Player::White, next.current_player());
        assert_eq!(Scores { black: 4, white: 1 }, next.scores());
        assert_eq!(Some(coord("d3")), next.last_move());
        assert_eq!(
            Err(ReversiError::IllegalMove {
                coord: coord("a1"),
                player: Player::White
            }),
            next.apply_move(coord("a1"))
        );
    }

    #[test]
    fn test_pass() {
        // white has no move, black can still play c1
        let mut board = Board::new();
        board.set(coord("a1"), Some(Player::Black));
        board.set(coord("b1"), Some(Player::White));
        let state = ReversiState::new(board, Player::White);

        assert!(state.legal_moves().is_empty());
        assert!(state.must_pass());
        assert!(!state.is_game_over());

        let passed = state.pass_turn().unwrap();
        assert_eq!(Player::Black, passed.current_player());
        assert_eq!(&[coord("c1")], passed.legal_moves());
        assert_eq!(
            Err(ReversiError::CannotPass {
                player: Player::Black
            }),
            passed.pass_turn()
        );
    }

    #[test]
    fn test_game_over_and_winner() {
        let mut board = Board::new();
        board.set(coord("a1"), Some(Player::Black));
        board.set(coord("h8"), Some(Player::Black));
        board.set(coord("d4"), Some(Player::White));
        let state = ReversiState::new(board, Player::White);

        assert!(state.is_game_over());
        assert!(!state.must_pass());
        assert_eq!(Some(Outcome::Winner(Player::Black)), state.winner());
        assert_eq!(Err(ReversiError::GameOver), state.pass_turn());
        assert_eq!(Err(ReversiError::GameOver), state.apply_move(coord("b2")));
    }

    #[test]
    fn test_draw() {
        let mut board = Board::new();
        board.set(coord("a1"), Some(Player::Black));
        board.set(coord("h8"), Some(Player::White));
        let state = ReversiState::new(board, Player::Black);
        assert_eq!(Some(Outcome::Draw), state.winner());
    }
}
