use egui::{Color32, FontId, Pos2, Rect, Vec2};
use skakbord_core::board::{BoardError, Color, Square};

use crate::constants::{
    BOARD_DARK, BOARD_LAST_MOVE, BOARD_LIGHT, DEFAULT_SQUARE_SIZE, LETTERED_BLACK_FILL,
    LETTERED_WHITE_FILL, SELECTED_COLOR,
};

/// Board geometry and colors, scaled to a square size in points.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStyle {
    pub square_size: f32,
}

impl BoardStyle {
    pub fn new(square_size: f32) -> Self {
        Self { square_size }
    }

    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    pub fn selected_stroke_width(&self) -> f32 {
        3.0 / 80.0 * self.square_size
    }

    pub fn label_font(&self) -> FontId {
        FontId::proportional(12.0 / 80.0 * self.square_size)
    }

    pub fn lettered_font(&self) -> FontId {
        FontId::monospace(0.45 * self.square_size)
    }

    /// The on-screen rectangle of `square`. Row 0 is drawn at the top.
    pub fn square_rect(&self, square: Square, board_rect: Rect) -> Rect {
        let offset = Vec2::new(square.column() as f32, square.row() as f32) * self.square_size;
        Rect::from_min_size(board_rect.left_top() + offset, Vec2::splat(self.square_size))
    }

    /// The square under `pos`, found by integer division of the offset from
    /// the board's top left corner by the square size.
    pub fn square_at(&self, board_rect: Rect, pos: Pos2) -> Result<Square, BoardError> {
        let rel = (pos - board_rect.left_top()) / self.square_size;
        Square::try_new(rel.y.floor() as i32, rel.x.floor() as i32)
    }

    pub fn square_color(&self, square: Square) -> Color32 {
        if square.is_light() {
            BOARD_LIGHT
        } else {
            BOARD_DARK
        }
    }

    /// Color for coordinate labels drawn on `square`, contrasting with it.
    pub fn label_color(&self, square: Square) -> Color32 {
        if square.is_light() {
            BOARD_DARK
        } else {
            BOARD_LIGHT
        }
    }

    pub fn last_move_color(&self) -> Color32 {
        BOARD_LAST_MOVE
    }

    pub fn selected_color(&self) -> Color32 {
        SELECTED_COLOR
    }

    /// (fill, outline) of a lettered piece disc.
    pub fn lettered_colors(&self, color: Color) -> (Color32, Color32) {
        match color {
            Color::White => (LETTERED_WHITE_FILL, LETTERED_BLACK_FILL),
            Color::Black => (LETTERED_BLACK_FILL, LETTERED_WHITE_FILL),
        }
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self::new(DEFAULT_SQUARE_SIZE)
    }
}
