use rand::Rng;

use crate::difficulty::Difficulty;

use super::ai::select_move;
use super::board::color::Color;
use super::board::error::ChessError;
use super::board::square::Square;
use super::board::Board;
use super::chess_move::ChessMove;
use super::move_generator::{self, ChessMoveList};
use super::position::Position;

/// A chess game: the current position, every move played to reach it, and
/// the derived check state.
///
/// Games are values. `apply_move`, `undo` and `resign` return a new game and
/// leave `self` as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessGame {
    position: Position,
    history: Vec<ChessMove>,
    is_check: bool,
    is_checkmate: bool,
    resigned: Option<Color>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::from_position(Position::starting_position())
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Position) -> Self {
        Self::with_history(position, Vec::new(), None)
    }

    fn with_history(
        position: Position,
        history: Vec<ChessMove>,
        resigned: Option<Color>,
    ) -> Self {
        let is_check = move_generator::is_in_check(position.board(), position.turn());
        let is_checkmate = is_check && !move_generator::has_legal_move(&position);
        Self {
            position,
            history,
            is_check,
            is_checkmate,
            resigned,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last()
    }

    /// Legal moves for the piece on `from`, for whichever side owns it.
    pub fn legal_moves(&self, from: Square) -> ChessMoveList {
        move_generator::legal_moves_from(self.board(), from)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.legal_moves(from)
            .iter()
            .map(|chess_move| chess_move.to_square())
            .collect()
    }

    /// Every legal move for the side to move.
    pub fn all_legal_moves(&self) -> ChessMoveList {
        move_generator::legal_moves(&self.position)
    }

    /// Plays the piece on `from` to `to` for the side to move.
    pub fn apply_move(&self, from: Square, to: Square) -> Result<ChessGame, ChessError> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }

        let piece = self
            .board()
            .get(from)
            .ok_or(ChessError::EmptySquare { square: from })?;
        if piece.color != self.turn() {
            return Err(ChessError::NotYourPiece {
                square: from,
                color: piece.color,
                turn: self.turn(),
            });
        }

        let chess_move = self
            .legal_moves(from)
            .into_iter()
            .find(|chess_move| chess_move.to_square() == to)
            .ok_or(ChessError::IllegalMove { from, to })?;

        self.apply_chess_move(&chess_move)
    }

    /// Plays a move record produced by this game's move generator or AI.
    pub fn apply_chess_move(&self, chess_move: &ChessMove) -> Result<ChessGame, ChessError> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        if !self.all_legal_moves().contains(chess_move) {
            return Err(ChessError::IllegalMove {
                from: chess_move.from_square(),
                to: chess_move.to_square(),
            });
        }

        let position = self.position.make_move(chess_move)?;
        let mut history = self.history.clone();
        history.push(*chess_move);
        Ok(Self::with_history(position, history, None))
    }

    /// Takes back the last move. A resignation is withdrawn along with it.
    pub fn undo(&self) -> Result<ChessGame, ChessError> {
        let mut history = self.history.clone();
        let last = history.pop().ok_or(ChessError::NothingToUndo)?;
        let position = self.position.unmake_move(&last)?;
        Ok(Self::with_history(position, history, None))
    }

    /// The side to move gives up.
    pub fn resign(&self) -> Result<ChessGame, ChessError> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        Ok(Self {
            resigned: Some(self.turn()),
            ..self.clone()
        })
    }

    pub fn is_in_check(&self) -> bool {
        self.is_check
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        move_generator::is_stalemate(&self.position)
    }

    pub fn resigned(&self) -> Option<Color> {
        self.resigned
    }

    pub fn is_game_over(&self) -> bool {
        self.resigned.is_some() || !move_generator::has_legal_move(&self.position)
    }

    /// The winning side, if the game ended by checkmate or resignation.
    pub fn winner(&self) -> Option<Color> {
        if let Some(loser) = self.resigned {
            return Some(loser.opposite());
        }
        if self.is_checkmate {
            return Some(self.turn().opposite());
        }
        None
    }

    /// The computer's move for the side to move.
    pub fn select_ai_move<R>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<ChessMove, ChessError>
    where
        R: Rng + ?Sized,
    {
        if self.resigned.is_some() {
            return Err(ChessError::GameOver);
        }
        select_move(&self.position, difficulty, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::chess::board::piece::{Piece, PieceKind};
    use crate::chess::board::square::*;
    use crate::chess_position;

    fn fools_mate() -> ChessGame {
        let game = ChessGame::new();
        let game = game.apply_move(F2, F3).unwrap();
        let game = game.apply_move(E7, E5).unwrap();
        let game = game.apply_move(G2, G4).unwrap();
        game.apply_move(D8, H4).unwrap()
    }

    #[test]
    fn test_apply_move_leaves_game_untouched() {
        let game = ChessGame::new();
        let before = game.clone();

        let next = game.apply_move(E2, E4).unwrap();

        assert_eq!(before, game);
        assert_eq!(Color::Black, next.turn());
        assert_eq!(1, next.history().len());
        assert_eq!(None, next.board().get(E2));
    }

    #[test]
    fn test_fools_mate() {
        let game = fools_mate();
        assert!(game.is_in_check());
        assert!(game.is_checkmate());
        assert!(game.is_game_over());
        assert_eq!(Some(Color::Black), game.winner());
        assert_eq!(Err(ChessError::GameOver), game.apply_move(A2, A3));
        assert_eq!(
            Err(ChessError::NoLegalMoves),
            game.select_ai_move(Difficulty::Easy, &mut StdRng::seed_from_u64(0))
        );
    }

    #[test]
    fn test_undo_restores_every_prior_state() {
        let mut games = vec![ChessGame::new()];
        for (from, to) in [(E2, E4), (D7, D5), (E4, D5), (D8, D5), (B1, C3)] {
            let next = games.last().unwrap().apply_move(from, to).unwrap();
            games.push(next);
        }

        while games.len() > 1 {
            let last = games.pop().unwrap();
            assert_eq!(games.last().unwrap(), &last.undo().unwrap());
        }
        assert_eq!(Err(ChessError::NothingToUndo), games[0].undo());
    }

    #[test]
    fn test_undo_castling_restores_moved_flags() {
        let game = ChessGame::from_position(Position::new(
            chess_position! {
                r...k..r
                ........
                ........
                ........
                ........
                ........
                ........
                R...K..R
            },
            Color::White,
        ));

        let castled = game.apply_move(E1, G1).unwrap();
        assert!(castled.last_move().unwrap().is_castling());
        assert_eq!(
            Some(Piece::new(PieceKind::Rook, Color::White).moved()),
            castled.board().get(F1)
        );

        let restored = castled.undo().unwrap();
        assert_eq!(game, restored);
        assert!(!restored.board().get(E1).unwrap().has_moved);
        assert!(!restored.board().get(H1).unwrap().has_moved);
    }

    #[test]
    fn test_rejects_moves_out_of_turn_or_illegal() {
        let game = ChessGame::new();
        assert_eq!(
            Err(ChessError::NotYourPiece {
                square: E7,
                color: Color::Black,
                turn: Color::White,
            }),
            game.apply_move(E7, E5)
        );
        assert_eq!(
            Err(ChessError::IllegalMove { from: E2, to: E5 }),
            game.apply_move(E2, E5)
        );
        assert_eq!(
            Err(ChessError::EmptySquare { square: E4 }),
            game.apply_move(E4, E5)
        );
    }

    #[test]
    fn test_legal_destinations() {
        let game = ChessGame::new();
        assert_eq!(vec![A3, C3], game.legal_destinations(B1));
        // the owner of the piece decides, not the turn
        assert_eq!(vec![E6, E5], game.legal_destinations(E7));
    }

    #[test]
    fn test_resign() {
        let game = ChessGame::new().apply_move(E2, E4).unwrap();
        let resigned = game.resign().unwrap();

        assert!(resigned.is_game_over());
        assert_eq!(Some(Color::Black), resigned.resigned());
        assert_eq!(Some(Color::White), resigned.winner());
        assert_eq!(Err(ChessError::GameOver), resigned.resign());
        assert_eq!(None, game.winner());
    }

    #[test]
    fn test_stalemate_has_no_winner() {
        let game = ChessGame::from_position(Position::new(
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
        ));
        assert!(game.is_stalemate());
        assert!(game.is_game_over());
        assert!(!game.is_checkmate());
        assert_eq!(None, game.winner());
    }

    #[test]
    fn test_ai_move_is_playable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = ChessGame::new();
        for _ in 0..6 {
            let chess_move = game.select_ai_move(Difficulty::Medium, &mut rng).unwrap();
            game = game.apply_chess_move(&chess_move).unwrap();
        }
        assert_eq!(6, game.history().len());
    }
}
