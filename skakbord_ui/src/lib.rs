pub mod board_style;
pub mod board_ui;
pub mod constants;
pub mod piece_textures;
