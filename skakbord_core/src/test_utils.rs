use proptest::prelude::*;

use crate::board::{Board, Piece, Square};

pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Builds a board from an 8x8 diagram, top row first. `.` is an empty
/// square, whitespace is ignored.
pub fn board_from_diagram(diagram: &str) -> Board {
    let mut board = Board::empty();
    let mut square_iter = Square::all();

    for c in diagram.chars() {
        if c.is_whitespace() {
            continue;
        } else if c == '.' {
            square_iter.next();
        } else if let (Some(square), Some(piece)) =
            (square_iter.next(), Piece::try_from_fen_char(c))
        {
            board.set_piece(square, Some(piece));
        } else {
            panic!("bad board diagram character {c:?}")
        }
    }

    board
}

pub fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(row, column)| Square::new_unchecked(row, column))
}
