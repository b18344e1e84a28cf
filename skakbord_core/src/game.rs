//! Game state: the board, its history, whose turn it is and what the user
//! has selected.

use log::{debug, info};

use crate::{
    board::{Board, BoardError, Color, Square},
    history::{History, MoveRecord},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Piece(Square),
}

/// What a click on the board did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected.
    Selected(Square),
    /// The selected piece was moved; carries the new history entry.
    Moved(MoveRecord),
    /// Nothing changed.
    Ignored,
}

/// Everything a game needs, owned in one place.
///
/// Moves are not checked against the rules of chess. The only constraint is
/// turn order: the user may only pick up pieces of the side to move, and
/// may not drop them on a square occupied by that same side.
#[derive(Debug, Clone)]
pub struct GameState {
    initial: Board,
    board: Board,
    history: History,
    to_move: Color,
    selection: Selection,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_board(Board::starting_position())
    }

    /// Starts a game from a custom position, White to move. Resetting the
    /// game returns to this position.
    pub fn with_board(board: Board) -> Self {
        Self {
            initial: board,
            board,
            history: History::new(&board),
            to_move: Color::White,
            selection: Selection::None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The square to highlight, if any.
    pub fn selected(&self) -> Option<Square> {
        match self.selection {
            Selection::None => None,
            Selection::Piece(square) => Some(square),
        }
    }

    /// Like [`Self::click`], for coordinates that have not been validated
    /// yet.
    pub fn click_at(&mut self, row: i32, column: i32) -> Result<ClickOutcome, BoardError> {
        let square = Square::try_new(row, column)?;
        Ok(self.click(square))
    }

    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let own_piece = self
            .board
            .piece_at(square)
            .is_some_and(|piece| piece.color() == self.to_move);

        match self.selection {
            Selection::None if own_piece => {
                debug!("{} selected {square}", self.to_move);
                self.selection = Selection::Piece(square);
                ClickOutcome::Selected(square)
            }
            Selection::None => ClickOutcome::Ignored,

            // Clicking another piece of the same side does not move the
            // selection.
            Selection::Piece(_) if own_piece => ClickOutcome::Ignored,

            Selection::Piece(from) => ClickOutcome::Moved(self.make_move(from, square)),
        }
    }

    fn make_move(&mut self, from: Square, to: Square) -> MoveRecord {
        let captured = self.board.move_piece(from, to);
        let record = self.history.record_move(from, to, captured).clone();
        self.history.snapshot(&self.board);

        self.to_move = self.to_move.flip();
        self.selection = Selection::None;

        debug!("played {record}, {} to move", self.to_move);
        record
    }

    /// Takes back the latest move. Returns false if there was nothing to
    /// take back.
    ///
    /// The side to move is not changed, and any selection is dropped.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(restored) => {
                self.board = *restored;
                self.selection = Selection::None;
                info!("undid last move, {} moves left", self.history.len());
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }

    /// Back to the initial position with White to move.
    pub fn reset(&mut self) {
        self.board = self.initial;
        self.history.reset(&self.board);
        self.to_move = Color::White;
        self.selection = Selection::None;
        info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        board::Piece,
        test_utils::{arb_square, board_from_diagram, sq},
    };

    fn play(game: &mut GameState, from: &str, to: &str) -> MoveRecord {
        assert_eq!(game.click(sq(from)), ClickOutcome::Selected(sq(from)));
        match game.click(sq(to)) {
            ClickOutcome::Moved(record) => record,
            other => panic!("expected {from} to {to} to be played, got {other:?}"),
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();

        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.selection(), Selection::None);
        assert_eq!(game.selected(), None);
        assert_eq!(game.history().snapshots().len(), 1);
    }

    #[test]
    fn test_select_own_piece() {
        let mut game = GameState::new();

        assert_eq!(game.click(sq("e2")), ClickOutcome::Selected(sq("e2")));
        assert_eq!(game.selection(), Selection::Piece(sq("e2")));
        assert_eq!(game.selected(), Some(sq("e2")));
    }

    #[test]
    fn test_cannot_select_empty_or_opposing_square() {
        let mut game = GameState::new();

        assert_eq!(game.click(sq("e4")), ClickOutcome::Ignored);
        assert_eq!(game.click(sq("e7")), ClickOutcome::Ignored);
        assert_eq!(game.selection(), Selection::None);
    }

    #[test]
    fn test_move_flips_side_to_move() {
        let mut game = GameState::new();

        let record = play(&mut game, "e2", "e4");

        assert_eq!(record.notation(), "e2 to e4");
        assert_eq!(record.number(), 1);
        assert_eq!(record.captured(), None);
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.selection(), Selection::None);
        assert_eq!(game.board().piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(game.board().piece_at(sq("e2")), None);

        // White pieces can no longer be selected.
        assert_eq!(game.click(sq("d2")), ClickOutcome::Ignored);

        play(&mut game, "e7", "e5");
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn test_any_destination_is_accepted() {
        let mut game = GameState::new();

        // Pawn sideways.
        play(&mut game, "e2", "d3");
        // Knight to the far corner of the board.
        play(&mut game, "g8", "a1");

        assert_eq!(
            *game.board(),
            board_from_diagram(
                "
                rnbqkb.r
                pppppppp
                ........
                ........
                ........
                ...P....
                PPPP.PPP
                nNBQKBNR
                "
            )
        );
        assert_eq!(
            game.history().last_move().and_then(MoveRecord::captured),
            Some(Piece::WHITE_ROOK)
        );
    }

    #[test]
    fn test_capture_records_captured_piece() {
        let mut game = GameState::new();

        let record = play(&mut game, "d1", "d7");

        assert_eq!(record.captured(), Some(Piece::BLACK_PAWN));
        assert_eq!(game.board().piece_at(sq("d7")), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn test_clicking_own_piece_keeps_selection() {
        let mut game = GameState::new();

        game.click(sq("g1"));
        assert_eq!(game.click(sq("b1")), ClickOutcome::Ignored);
        assert_eq!(game.selected(), Some(sq("g1")));

        // The selected square itself is an own piece too.
        assert_eq!(game.click(sq("g1")), ClickOutcome::Ignored);
        assert_eq!(game.selected(), Some(sq("g1")));
        assert_eq!(game.board(), &Board::starting_position());
    }

    #[test]
    fn test_click_at_validates_coordinates() {
        let mut game = GameState::new();

        assert_eq!(
            game.click_at(8, 0),
            Err(BoardError::InvalidSquare { row: 8, column: 0 })
        );
        assert_eq!(
            game.click_at(0, -1),
            Err(BoardError::InvalidSquare { row: 0, column: -1 })
        );
        assert_eq!(game.selection(), Selection::None);

        assert_eq!(
            game.click_at(6, 4),
            Ok(ClickOutcome::Selected(Square::new_unchecked(6, 4)))
        );
        assert!(matches!(game.click_at(4, 4), Ok(ClickOutcome::Moved(_))));
        assert_eq!(game.history().list()[0].notation(), "e2 to e4");
    }

    #[test]
    fn test_undo_restores_board_but_not_side_to_move() {
        let mut game = GameState::new();

        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        let before = *game.board();
        play(&mut game, "g1", "f3");

        assert!(game.undo());
        assert_eq!(game.board(), &before);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_undo_clears_selection() {
        let mut game = GameState::new();

        play(&mut game, "e2", "e4");
        game.click(sq("e7"));

        assert!(game.undo());
        assert_eq!(game.selection(), Selection::None);
    }

    #[test]
    fn test_undo_without_moves_is_noop() {
        let mut game = GameState::new();
        game.click(sq("e2"));

        assert!(!game.undo());
        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.history().len(), 0);
        assert_eq!(game.selected(), Some(sq("e2")));
    }

    #[test]
    fn test_reset_restores_white_to_move() {
        let mut game = GameState::new();

        play(&mut game, "e2", "e4");
        game.click(sq("e7"));

        game.reset();

        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.selection(), Selection::None);
        assert!(game.history().is_empty());
        assert_eq!(game.history().snapshots().len(), 1);

        let board = game.board();
        assert_eq!(board.piece_at(Square::new_unchecked(0, 0)), Some(Piece::BLACK_ROOK));
        assert_eq!(board.piece_at(Square::new_unchecked(7, 4)), Some(Piece::WHITE_KING));
    }

    #[test]
    fn test_reset_returns_to_custom_position() {
        let start = Board::try_from_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        let mut game = GameState::with_board(start);

        play(&mut game, "e1", "e2");
        game.reset();

        assert_eq!(game.board(), &start);
    }

    proptest! {
        #[test]
        fn test_random_clicks_keep_history_consistent(
            clicks in prop::collection::vec(prop_oneof![
                8 => arb_square().prop_map(Some),
                1 => Just(None),
            ], 0..200)
        ) {
            let mut game = GameState::new();
            let mut expected_to_move = Color::White;

            for click in clicks {
                match click {
                    Some(square) => {
                        let before = *game.board();
                        if let ClickOutcome::Moved(record) = game.click(square) {
                            expected_to_move = expected_to_move.flip();

                            // Undo right after a move gives the old board back.
                            let mut undone = game.clone();
                            prop_assert!(undone.undo());
                            prop_assert_eq!(undone.board(), &before);
                            prop_assert_eq!(record.number(), game.history().len());
                        }
                    }
                    None => {
                        game.undo();
                    }
                }

                let history = game.history();
                prop_assert_eq!(history.snapshots().len(), history.list().len() + 1);
                prop_assert_eq!(history.snapshots().last(), Some(game.board()));
                prop_assert_eq!(game.to_move(), expected_to_move);
            }
        }
    }
}
