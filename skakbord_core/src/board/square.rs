use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use super::BoardError;

/// A square on the board, addressed by row and column.
///
/// Row 0 is the top row as the board is displayed (rank 8, Black's back rank)
/// and column 0 is the a-file. Internally the square is stored as
/// `8 * row + column`, so index 0 is a8 and index 63 is h1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Constructs a square from signed coordinates, such as those computed
    /// from a pointer position.
    pub fn try_new(row: i32, column: i32) -> Result<Self, BoardError> {
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Ok(Self::new_unchecked(row as _, column as _))
        } else {
            Err(BoardError::InvalidSquare { row, column })
        }
    }

    pub const fn new_unchecked(row: u8, column: u8) -> Self {
        Self(row.overflowing_mul(8).0.overflowing_add(column).0 % 64)
    }

    pub const fn index(self) -> usize {
        self.0 as _
    }

    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// The rank as printed in notation, 1 to 8.
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }

    /// The file as printed in notation, 'a' to 'h'.
    pub const fn file_char(self) -> char {
        (b'a' + self.column()) as char
    }

    /// Whether this square is drawn in the light color.
    pub const fn is_light(self) -> bool {
        (self.row() + self.column()) % 2 == 0
    }

    /// Iterates over all 64 squares, row by row from the top left.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.file_char())?;
        f.write_char((b'0' + self.rank()) as _)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidSquareName(s.to_string());

        let mut char_iter = s.chars();
        let file = char_iter.next().ok_or_else(invalid)?;
        let rank = char_iter.next().ok_or_else(invalid)?;
        if char_iter.next().is_some() {
            return Err(invalid());
        }

        let rank = (rank as i32) - ('1' as i32);
        let column = (file as i32) - ('a' as i32);
        if (0..8).contains(&rank) && (0..8).contains(&column) {
            Ok(Square::new_unchecked(7 - rank as u8, column as _))
        } else {
            Err(invalid())
        }
    }
}
