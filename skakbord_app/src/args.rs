use std::path::PathBuf;

use clap::Parser;
use skakbord_core::board::Board;

/// Skakborð: a chess board without rules.
///
/// Click a piece of the side to move, then click where it should go. Any
/// destination is accepted. Press U to take back a move and R to start over.
/// The move list is printed to stdout after every move.
#[derive(Parser, Debug)]
pub struct Args {
    /// Directory holding the twelve piece bitmaps.
    ///
    /// Files are named after the piece they show, e.g. `white_pawn.bmp`,
    /// `black_knight.bmp`. Every file must be present and readable.
    #[arg(short, long, default_value = "images")]
    pub assets: PathBuf,

    /// Draw pieces as lettered discs instead of loading bitmaps.
    #[arg(long)]
    pub lettered: bool,

    /// Size of one board square in points.
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(24..=200), default_value_t = 80)]
    pub tile_size: u16,

    /// Starting position of the board.
    ///
    /// Expects either the string "startpos" or the piece placement field of
    /// a position in Forsyth-Edwards Notation (FEN), top row first. A full
    /// FEN string is also accepted; only the placement is used and White
    /// always moves first.
    #[arg(short, long, default_value = "startpos", value_parser = parse_position)]
    pub position: Board,

    /// Show a move list with undo/reset buttons and a status bar next to the
    /// board. Without it the window is exactly the size of the board.
    #[arg(long)]
    pub side_panel: bool,
}

fn parse_position(s: &str) -> Result<Board, String> {
    if s == "startpos" {
        Ok(Board::starting_position())
    } else {
        Board::try_from_placement(s).map_err(|e| {
            format!("Expected `startpos` or a valid FEN placement. Parsing error: {e}")
        })
    }
}
