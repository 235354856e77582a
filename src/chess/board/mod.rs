pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;

use color::Color;
use error::ChessError;
use piece::{Piece, PieceKind};
use square::Square;

use crate::chess_position;

/// Piece placement for a chess game: one optional occupant per square.
///
/// Boards are plain values. Copying one is the only way to derive a new
/// position, so a board held in a game history is never changed by search.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), ChessError> {
        if self.is_occupied(square) {
            return Err(ChessError::SquareOccupied { square });
        }
        self.squares[square.index()] = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Overwrites whatever is on `square`, returning the previous occupant.
    pub fn set(&mut self, square: Square, occupant: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.index()], occupant)
    }

    /// All occupied squares, from a1 to h8.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
}
