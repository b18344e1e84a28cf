use egui::Color32;

pub const DEFAULT_SQUARE_SIZE: f32 = 80.0;

pub const BOARD_LIGHT: Color32 = Color32::from_rgb(0xf0, 0xd9, 0xb5);
pub const BOARD_DARK: Color32 = Color32::from_rgb(0xb5, 0x88, 0x63);
pub const BOARD_LAST_MOVE: Color32 = Color32::from_rgba_premultiplied(0x66, 0x85, 0x00, 0x68);

pub const SELECTED_COLOR: Color32 = Color32::from_rgb(0, 255, 0);

pub const LETTERED_WHITE_FILL: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
pub const LETTERED_BLACK_FILL: Color32 = Color32::from_rgb(0x20, 0x20, 0x20);
