pub mod board;
pub mod game;
pub mod history;

#[cfg(test)]
mod test_utils;
