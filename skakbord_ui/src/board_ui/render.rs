use egui::{pos2, Align2, Color32, Painter, Rect, Stroke, Vec2};
use skakbord_core::board::{Board, Piece, Square};

use crate::{board_style::BoardStyle, piece_textures::PieceSet};

const FULL_UV: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

pub struct BoardRenderContext<'a> {
    pub painter: &'a Painter,
    pub style: &'a BoardStyle,
    pub board_rect: Rect,
    pub pieces: &'a PieceSet,
}

impl<'a> BoardRenderContext<'a> {
    fn square_rect(&self, square: Square) -> Rect {
        self.style.square_rect(square, self.board_rect)
    }

    pub fn paint_board(&self) {
        for square in Square::all() {
            let rect = self.square_rect(square);
            self.painter.rect_filled(rect, 0.0, self.style.square_color(square));

            // Draw coordinate indicators
            let text_color = self.style.label_color(square);

            if square.row() == 7 {
                self.painter.text(
                    rect.left_bottom() + Vec2::new(2.0, -2.0),
                    Align2::LEFT_BOTTOM,
                    square.file_char(),
                    self.style.label_font(),
                    text_color,
                );
            }

            if square.column() == 7 {
                self.painter.text(
                    rect.right_top() + Vec2::new(-2.0, 2.0),
                    Align2::RIGHT_TOP,
                    square.rank(),
                    self.style.label_font(),
                    text_color,
                );
            }
        }
    }

    pub fn paint_last_move(&self, last_move: Option<(Square, Square)>) {
        if let Some((from, to)) = last_move {
            for square in [from, to] {
                self.painter
                    .rect_filled(self.square_rect(square), 0.0, self.style.last_move_color());
            }
        }
    }

    pub fn paint_pieces(&self, board: &Board) {
        for (square, piece) in board.pieces() {
            let rect = self.square_rect(square);

            match self.pieces {
                PieceSet::Images(textures) => match textures.get(piece) {
                    Some(texture) => {
                        self.painter
                            .image(texture.id(), rect, FULL_UV, Color32::WHITE);
                    }
                    None => self.paint_lettered_piece(piece, rect),
                },
                PieceSet::Lettered => self.paint_lettered_piece(piece, rect),
            }
        }
    }

    fn paint_lettered_piece(&self, piece: Piece, rect: Rect) {
        let (fill, outline) = self.style.lettered_colors(piece.color());
        let radius = rect.width() * 0.38;

        self.painter.circle(
            rect.center(),
            radius,
            fill,
            Stroke::new(rect.width() * 0.03, outline),
        );
        self.painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            piece.piece_type().as_uppercase_char(),
            self.style.lettered_font(),
            outline,
        );
    }

    pub fn paint_selected(&self, selected: Option<Square>) {
        if let Some(square) = selected {
            let width = self.style.selected_stroke_width();
            self.painter.rect_stroke(
                self.square_rect(square).shrink(width / 2.0),
                0.0,
                Stroke::new(width, self.style.selected_color()),
            );
        }
    }
}
