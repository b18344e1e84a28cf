use super::{Board, BoardError, Piece, Square};

/// Writes the piece placement field of a FEN string, top row first.
pub fn board_to_placement(board: &Board) -> String {
    let mut result = String::new();

    for row in 0..8 {
        let mut empty_squares = 0;
        for column in 0..8 {
            match board.piece_at(Square::new_unchecked(row, column)) {
                None => empty_squares += 1,
                Some(piece) => {
                    if empty_squares > 0 {
                        result.push((empty_squares + b'0') as _);
                    }
                    result.push(piece.as_fen_char());
                    empty_squares = 0;
                }
            }
        }
        if empty_squares > 0 {
            result.push((empty_squares + b'0') as _);
        }
        if row < 7 {
            result.push('/');
        }
    }

    result
}

/// Parses the piece placement field of a FEN string. Anything after the
/// first space (side to move, castling rights...) is ignored, so a full FEN
/// string is also accepted.
pub fn try_parse_placement(placement: &str) -> Result<Board, BoardError> {
    let placement = placement.split(' ').next().unwrap_or_default();

    let rows: Vec<_> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(BoardError::InvalidPlacement(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, row_pieces) in rows.into_iter().enumerate() {
        let mut column = 0;
        for c in row_pieces.chars() {
            if column >= 8 {
                return Err(BoardError::InvalidPlacement(format!(
                    "row {} is longer than 8 squares",
                    row + 1
                )));
            }

            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(BoardError::InvalidPlacement(format!(
                        "bad empty square count `{c}`"
                    )));
                }
                column += digit as u8;
            } else {
                let piece = Piece::try_from_fen_char(c).ok_or_else(|| {
                    BoardError::InvalidPlacement(format!("unknown piece `{c}`"))
                })?;
                board.set_piece(Square::new_unchecked(row as _, column), Some(piece));
                column += 1;
            }
        }

        if column != 8 {
            return Err(BoardError::InvalidPlacement(format!(
                "row {} covers {column} squares instead of 8",
                row + 1
            )));
        }
    }

    Ok(board)
}
