use std::fmt::{Display, Write};

/// Represents the type of a piece, but not its colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Convenience method for constructing a white [`Piece`].
    pub const fn white(self) -> Piece {
        Piece::white(self)
    }

    /// Convenience method for constructing a black [`Piece`].
    pub const fn black(self) -> Piece {
        Piece::black(self)
    }

    /// Get the FEN representation of the white version of this piece.
    pub const fn as_uppercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

/// Represents a player (either white or black).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns true if this is [`Color::White`].
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// Returns true if this is [`Color::Black`].
    pub const fn is_black(self) -> bool {
        !self.is_white()
    }

    /// Inverts the color, i.e. maps [`Color::White`] to [`Color::Black`] and
    /// vice versa.
    pub const fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// A piece of a given [`Color`] and [`PieceType`].
///
/// An empty square is represented as [`None`] in an [`Option<Piece>`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    piece_type: PieceType,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceType::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceType::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceType::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceType::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceType::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceType::King);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceType::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceType::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceType::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceType::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceType::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceType::King);

    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    pub const fn white(piece_type: PieceType) -> Self {
        Self::new(Color::White, piece_type)
    }

    pub const fn black(piece_type: PieceType) -> Self {
        Self::new(Color::Black, piece_type)
    }

    /// Iterates over all twelve pieces, white first.
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL.into_iter().flat_map(|color| {
            PieceType::ALL
                .into_iter()
                .map(move |piece_type| Piece::new(color, piece_type))
        })
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    pub const fn is_white(self) -> bool {
        self.color.is_white()
    }

    pub const fn is_black(self) -> bool {
        self.color.is_black()
    }

    pub const fn as_fen_char(self) -> char {
        let c = self.piece_type.as_uppercase_char();
        if self.color.is_white() {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    pub const fn try_from_fen_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };

        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Some(Self::new(color, piece_type))
    }

    /// File stem of the bitmap used to draw this piece, e.g. `white_pawn`.
    pub fn asset_name(self) -> String {
        format!("{}_{}", self.color.name(), self.piece_type.name())
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.as_fen_char())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_piece_type_convenience_constructors() {
        for piece_type in PieceType::ALL {
            assert!(piece_type.white().is_white());
            assert!(piece_type.black().is_black());
            assert_eq!(piece_type.white().piece_type(), piece_type);
            assert_eq!(piece_type.black().piece_type(), piece_type);
        }
    }

    #[test]
    fn test_color_default_is_white() {
        assert_eq!(Color::default(), Color::White);
    }

    #[test]
    fn test_color_flip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
    }

    #[test]
    fn test_piece_as_fen_char() {
        let cases = [
            (Piece::WHITE_PAWN, 'P'),
            (Piece::WHITE_BISHOP, 'B'),
            (Piece::WHITE_KING, 'K'),
            (Piece::BLACK_KNIGHT, 'n'),
            (Piece::BLACK_ROOK, 'r'),
            (Piece::BLACK_QUEEN, 'q'),
        ];
        for (piece, expected) in cases {
            assert_eq!(piece.as_fen_char(), expected);
            assert_eq!(piece.to_string(), expected.to_string());
        }
    }

    #[test]
    fn test_piece_try_from_fen_char() {
        for piece in Piece::all() {
            assert_eq!(Piece::try_from_fen_char(piece.as_fen_char()), Some(piece));
        }

        assert_eq!(Piece::try_from_fen_char('X'), None);
        assert_eq!(Piece::try_from_fen_char('a'), None);
        assert_eq!(Piece::try_from_fen_char('1'), None);
    }

    #[test]
    fn test_asset_names() {
        let names: Vec<_> = Piece::all().map(Piece::asset_name).collect();
        assert_eq!(
            names,
            [
                "white_pawn",
                "white_knight",
                "white_bishop",
                "white_rook",
                "white_queen",
                "white_king",
                "black_pawn",
                "black_knight",
                "black_bishop",
                "black_rook",
                "black_queen",
                "black_king",
            ]
        );
    }
}
