//! Structs and functions related to to the board representation.

mod fen;
mod piece;
mod square;

use std::fmt::Display;

use thiserror::Error;

pub use piece::{Color, Piece, PieceType};
pub use square::Square;

pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square (row {row}, column {column}) is off the board")]
    InvalidSquare { row: i32, column: i32 },

    #[error("invalid square name: `{0}`")]
    InvalidSquareName(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}

/// The contents of all 64 squares.
///
/// There are no rules attached to a board: any piece can be placed on or
/// moved to any square. Boards are small `Copy` values, so snapshots of the
/// position are plain copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// The standard starting position, Black at the top (row 0) and White at
    /// the bottom (row 7).
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        for (column, piece_type) in BACK_RANK.into_iter().enumerate() {
            let column = column as u8;
            board.set_piece(Square::new_unchecked(0, column), Some(piece_type.black()));
            board.set_piece(Square::new_unchecked(1, column), Some(Piece::BLACK_PAWN));
            board.set_piece(Square::new_unchecked(6, column), Some(Piece::WHITE_PAWN));
            board.set_piece(Square::new_unchecked(7, column), Some(piece_type.white()));
        }

        board
    }

    pub fn try_from_placement(placement: &str) -> Result<Self, BoardError> {
        fen::try_parse_placement(placement)
    }

    pub fn placement(&self) -> String {
        fen::board_to_placement(self)
    }

    /// Restores the starting position.
    pub fn reset(&mut self) {
        *self = Self::starting_position();
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Puts `piece` on `square`, returning whatever was there before.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.index()], piece)
    }

    /// Moves whatever is on `from` to `to` and empties `from`, returning the
    /// piece previously on `to`.
    ///
    /// No legality checks of any kind are made. The destination is written
    /// before the origin is cleared, so moving a square onto itself leaves it
    /// empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let captured = self.set_piece(to, moving);
        self.set_piece(from, None);
        captured
    }

    /// Returns an iterator over all occupied squares and their pieces, in
    /// row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for column in 0..8 {
                match self.piece_at(Square::new_unchecked(row, column)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::sq;

    fn count(board: &Board, piece: Piece) -> usize {
        board.pieces().filter(|&(_, p)| p == piece).count()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();

        assert_eq!(board.piece_at(Square::new_unchecked(0, 0)), Some(Piece::BLACK_ROOK));
        assert_eq!(board.piece_at(Square::new_unchecked(0, 4)), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(Square::new_unchecked(7, 4)), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::new_unchecked(7, 3)), Some(Piece::WHITE_QUEEN));

        for row in 2..6 {
            for column in 0..8 {
                assert_eq!(board.piece_at(Square::new_unchecked(row, column)), None);
            }
        }

        for column in 0..8 {
            assert_eq!(board.piece_at(Square::new_unchecked(1, column)), Some(Piece::BLACK_PAWN));
            assert_eq!(board.piece_at(Square::new_unchecked(6, column)), Some(Piece::WHITE_PAWN));
        }

        assert_eq!(count(&board, Piece::WHITE_KING), 1);
        assert_eq!(count(&board, Piece::BLACK_KING), 1);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Board::starting_position().to_string(),
            "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR\n"
        );
    }

    #[test]
    fn test_move_piece_to_empty_square() {
        let mut board = Board::starting_position();

        assert_eq!(board.move_piece(sq("e2"), sq("e4")), None);
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn test_move_piece_overwrites_destination() {
        let mut board = Board::starting_position();

        assert_eq!(board.move_piece(sq("d1"), sq("d8")), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(sq("d1")), None);
        assert_eq!(count(&board, Piece::BLACK_QUEEN), 0);
    }

    #[test]
    fn test_move_piece_ignores_chess_rules() {
        let mut board = Board::starting_position();

        // Pawn sideways onto a friendly piece.
        assert_eq!(board.move_piece(sq("e2"), sq("f2")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("f2")), Some(Piece::WHITE_PAWN));

        // Rook jumping over everything.
        assert_eq!(board.move_piece(sq("a1"), sq("a6")), None);
        assert_eq!(board.piece_at(sq("a6")), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn test_move_empty_square_clears_destination() {
        let mut board = Board::starting_position();

        assert_eq!(board.move_piece(sq("e4"), sq("e7")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("e7")), None);
    }

    #[test]
    fn test_move_onto_same_square_empties_it() {
        let mut board = Board::starting_position();

        assert_eq!(board.move_piece(sq("g1"), sq("g1")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.piece_at(sq("g1")), None);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::empty();
        board.set_piece(sq("c3"), Some(Piece::BLACK_BISHOP));

        board.reset();

        assert_eq!(board, Board::starting_position());
        assert_eq!(board, Board::default());
    }
}
