use std::io::{self, Write};

use eframe::egui::{self, Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};
use log::{info, warn};
use skakbord_core::{
    board::{Color, Square},
    game::{ClickOutcome, GameState},
    history::History,
};
use skakbord_ui::board_ui::BoardUI;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MoveHistoryRow<'a> {
    fullmoves: usize,
    white_move: Option<&'a str>,
    black_move: Option<&'a str>,
}

/// Groups plies into one row per full move. Each move goes in the column of
/// the color that made it, so a row may be missing either half when the same
/// side moved twice in a row (possible after an undo).
fn history_rows(history: &History) -> Vec<MoveHistoryRow<'_>> {
    let mut rows: Vec<MoveHistoryRow<'_>> = Vec::new();

    // snapshots[i] is the position records[i] was played from.
    for (record, before) in history.list().iter().zip(history.snapshots()) {
        let mover = before
            .piece_at(record.from_square())
            .map_or(Color::White, |piece| piece.color());

        match rows.last_mut() {
            Some(row) if mover.is_black() && row.black_move.is_none() => {
                row.black_move = Some(record.notation());
            }
            _ => {
                let fullmoves = rows.len() + 1;
                rows.push(MoveHistoryRow {
                    fullmoves,
                    white_move: mover.is_white().then_some(record.notation()),
                    black_move: mover.is_black().then_some(record.notation()),
                });
            }
        }
    }

    rows
}

/// Owns the game and the board widget, and connects the two. The move list
/// is written to `history_out` after every move.
pub struct GameManager<W: Write = io::Stdout> {
    game: GameState,
    board_ui: BoardUI,
    history_out: W,
}

impl GameManager {
    pub fn new(game: GameState, board_ui: BoardUI) -> Self {
        Self::with_output(game, board_ui, io::stdout())
    }
}

impl<W: Write> GameManager<W> {
    pub fn with_output(game: GameState, board_ui: BoardUI, history_out: W) -> Self {
        Self {
            game,
            board_ui,
            history_out,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let outcome = self.game.click(square);

        if let ClickOutcome::Moved(record) = &outcome {
            info!("move {}: {}", record.number(), record.notation());
            if let Err(e) = write!(self.history_out, "\n{}", self.game.history())
                .and_then(|()| self.history_out.flush())
            {
                warn!("unable to print move history: {e}");
            }
        }

        outcome
    }

    pub fn undo(&mut self) {
        self.game.undo();
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn ui_board(&mut self, ui: &mut Ui) {
        let mut props = BoardUI::props(self.game.board()).selected(self.game.selected());

        if let Some(record) = self.game.history().last_move() {
            props = props.show_last_move(record.from_square(), record.to_square());
        }

        let response = self.board_ui.ui(ui, props);

        if let Some(square) = response.clicked_square {
            self.click(square);
        }
    }

    pub fn ui_move_history(&mut self, ui: &mut Ui) {
        let rows = history_rows(self.game.history());

        let text_height = egui::TextStyle::Body
            .resolve(ui.style())
            .size
            .max(ui.spacing().interact_size.y);

        ui.style_mut().interaction.selectable_labels = false;

        TableBuilder::new(ui)
            .column(Column::auto().at_least(24.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .cell_layout(Layout::left_to_right(Align::Center))
            .stick_to_bottom(true)
            .striped(true)
            .body(|body| {
                body.rows(text_height, rows.len(), |mut r| {
                    let row = &rows[r.index()];

                    r.col(|ui| {
                        ui.label(format!("{}.", row.fullmoves));
                    });
                    r.col(|ui| {
                        ui.label(row.white_move.unwrap_or("..."));
                    });
                    r.col(|ui| {
                        ui.label(row.black_move.unwrap_or(""));
                    });
                });
            });
    }
}
