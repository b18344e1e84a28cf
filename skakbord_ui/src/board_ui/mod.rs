use egui::{Rect, Sense, Ui, Vec2};
use log::debug;
use skakbord_core::board::{Board, Square};

use crate::{board_style::BoardStyle, piece_textures::PieceSet};

use self::render::BoardRenderContext;

mod render;

#[derive(Debug)]
pub struct BoardUIProps<'a> {
    board: &'a Board,
    selected: Option<Square>,
    show_last_move: Option<(Square, Square)>,
}

impl<'a> BoardUIProps<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            selected: None,
            show_last_move: None,
        }
    }

    pub fn selected(mut self, selected: Option<Square>) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_last_move(mut self, from: Square, to: Square) -> Self {
        self.show_last_move = Some((from, to));
        self
    }
}

#[derive(Debug)]
pub struct BoardUIResponse {
    pub egui_response: egui::Response,
    /// Square under the primary button, on the frame it was pressed.
    pub clicked_square: Option<Square>,
}

/// Draws a board and reports which square was clicked. Holds no game state
/// of its own; everything to draw comes in through [`BoardUIProps`].
pub struct BoardUI {
    style: BoardStyle,
    pieces: PieceSet,
}

impl BoardUI {
    pub fn new(style: BoardStyle, pieces: PieceSet) -> Self {
        Self { style, pieces }
    }

    pub fn props(board: &Board) -> BoardUIProps {
        BoardUIProps::new(board)
    }

    pub fn ui(&mut self, ui: &mut Ui, props: BoardUIProps<'_>) -> BoardUIResponse {
        let board_size = Vec2::splat(self.style.board_size());
        let (egui_response, painter) = ui.allocate_painter(board_size, Sense::click());
        let board_rect = Rect::from_center_size(egui_response.rect.center(), board_size);

        let render = BoardRenderContext {
            painter: &painter,
            style: &self.style,
            board_rect,
            pieces: &self.pieces,
        };

        render.paint_board();
        render.paint_last_move(props.show_last_move);
        render.paint_pieces(props.board);
        render.paint_selected(props.selected);

        let clicked_square = self.handle_press(ui, &egui_response, board_rect);

        BoardUIResponse {
            egui_response,
            clicked_square,
        }
    }

    fn handle_press(
        &self,
        ui: &Ui,
        egui_response: &egui::Response,
        board_rect: Rect,
    ) -> Option<Square> {
        let pressed_at = ui.input(|input| {
            if input.pointer.primary_pressed() {
                input.pointer.interact_pos()
            } else {
                None
            }
        })?;

        if !egui_response.rect.contains(pressed_at) {
            return None;
        }

        match self.style.square_at(board_rect, pressed_at) {
            Ok(square) => Some(square),
            Err(err) => {
                debug!("ignoring press: {err}");
                None
            }
        }
    }
}
