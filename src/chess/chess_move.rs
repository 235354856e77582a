use core::fmt;

use super::board::color::Color;
use super::board::error::ChessError;
use super::board::piece::{Piece, PieceKind};
use super::board::square::Square;
use super::board::Board;

/// A move record: enough information to play the move and to take it back.
///
/// `piece` is the mover as it stood on `from` before the move, so its
/// `has_moved` flag is the one undo restores.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    is_castling: bool,
    promotion: Option<PieceKind>,
}

impl ChessMove {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            is_castling: false,
            promotion: None,
        }
    }

    /// Builds the move record for moving whatever stands on `from` to `to`,
    /// inferring capture, castling and promotion from the board.
    pub fn from_board(board: &Board, from: Square, to: Square) -> Result<Self, ChessError> {
        let piece = board
            .get(from)
            .ok_or(ChessError::EmptySquare { square: from })?;
        Ok(Self::for_piece(board, from, piece, to))
    }

    /// Like `from_board`, for a caller that already holds the piece on `from`.
    pub fn for_piece(board: &Board, from: Square, piece: Piece, to: Square) -> Self {
        let mut chess_move = ChessMove::new(from, to, piece, board.get(to));

        if piece.kind == PieceKind::King
            && !piece.has_moved
            && (to.file() as i8 - from.file() as i8).abs() == 2
        {
            chess_move.is_castling = true;
        }

        if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
            chess_move.promotion = Some(PieceKind::Queen);
        }

        chess_move
    }

    pub fn from_square(&self) -> Square {
        self.from
    }

    pub fn to_square(&self) -> Square {
        self.to
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn color(&self) -> Color {
        self.piece.color
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn is_castling(&self) -> bool {
        self.is_castling
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Rook start and destination squares for a castling move.
    fn castling_rook_squares(&self) -> Result<(Square, Square), ChessError> {
        let rank = self.from.rank();
        let squares = if self.to.file() > self.from.file() {
            (Square::new(7, rank), Square::new(5, rank))
        } else {
            (Square::new(0, rank), Square::new(3, rank))
        };
        match squares {
            (Some(rook_from), Some(rook_to)) => Ok((rook_from, rook_to)),
            _ => Err(ChessError::MoveMismatch {
                msg: "castling rook squares are off the board",
            }),
        }
    }

    /// Returns the board with this move played. The input is left untouched.
    pub fn apply(&self, board: &Board) -> Result<Board, ChessError> {
        let mut next = *board;

        if next.remove(self.from) != Some(self.piece) {
            return Err(ChessError::MoveMismatch {
                msg: "the moving piece is not on the from square",
            });
        }
        if next.get(self.to) != self.captured {
            return Err(ChessError::MoveMismatch {
                msg: "the expected capture differs from the target square",
            });
        }

        let landed = match self.promotion {
            Some(kind) => Piece::new(kind, self.piece.color).moved(),
            None => self.piece.moved(),
        };
        next.set(self.to, Some(landed));

        if self.is_castling {
            let (rook_from, rook_to) = self.castling_rook_squares()?;
            let rook = next.remove(rook_from).ok_or(ChessError::MoveMismatch {
                msg: "castling without a rook",
            })?;
            next.set(rook_to, Some(rook.moved()));
        }

        Ok(next)
    }

    /// Returns the board as it was before this move was played on it.
    pub fn undo(&self, board: &Board) -> Result<Board, ChessError> {
        let mut previous = *board;

        if previous.get(self.to).map(|piece| piece.color) != Some(self.piece.color) {
            return Err(ChessError::MoveMismatch {
                msg: "the moved piece is not on the to square",
            });
        }
        if previous.is_occupied(self.from) {
            return Err(ChessError::MoveMismatch {
                msg: "the from square is not empty",
            });
        }

        // put the captured piece back, or clear the square
        previous.set(self.to, self.captured);
        previous.set(self.from, Some(self.piece));

        if self.is_castling {
            let (rook_from, rook_to) = self.castling_rook_squares()?;
            let rook = previous.remove(rook_to).ok_or(ChessError::MoveMismatch {
                msg: "castled rook is missing",
            })?;
            // castling is only offered for an unmoved rook
            previous.set(
                rook_from,
                Some(Piece {
                    has_moved: false,
                    ..rook
                }),
            );
        }

        Ok(previous)
    }

    pub fn to_uci(&self) -> String {
        let promotion = match self.promotion {
            Some(kind) => kind.to_fen(Color::Black).to_string(),
            None => "".to_string(),
        };
        format!("{}{}{}", self.from, self.to, promotion)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let move_type = if self.is_castling {
            "Castle"
        } else if self.promotion.is_some() {
            "Promote to Queen"
        } else {
            "Move"
        };
        let capture = match self.captured {
            Some(piece) => format!(" capturing {}", piece),
            None => "".to_string(),
        };
        write!(
            f,
            "{} {}{}{}{}",
            move_type, self.piece, self.from, self.to, capture
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
