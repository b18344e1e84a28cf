mod args;
mod game_manager;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use eframe::egui::{self, Key, Layout, Vec2};
use game_manager::GameManager;
use log::{error, info};
use skakbord_core::game::GameState;
use skakbord_ui::{
    board_style::BoardStyle,
    board_ui::BoardUI,
    piece_textures::{AssetError, PieceImages, PieceSet},
};
use thiserror::Error;

const SIDE_PANEL_WIDTH: f32 = 200.0;
const STATUS_BAR_HEIGHT: f32 = 24.0;

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to load piece images: {0}")]
    Assets(#[from] AssetError),

    #[error("failed to open window: {0}")]
    Window(#[from] eframe::Error),
}

struct SkakbordApp {
    game_manager: GameManager,
    show_side_panel: bool,
}

impl SkakbordApp {
    fn new(
        ctx: &egui::Context,
        game: GameState,
        images: Option<PieceImages>,
        style: BoardStyle,
        show_side_panel: bool,
    ) -> Self {
        let pieces = match images {
            Some(images) => PieceSet::Images(images.upload(ctx)),
            None => PieceSet::Lettered,
        };

        Self {
            game_manager: GameManager::new(game, BoardUI::new(style, pieces)),
            show_side_panel,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (undo, reset) =
            ctx.input(|input| (input.key_pressed(Key::U), input.key_pressed(Key::R)));

        if undo {
            self.game_manager.undo();
        }
        if reset {
            self.game_manager.reset();
        }
    }
}

impl eframe::App for SkakbordApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        if self.show_side_panel {
            egui::SidePanel::right("right_panel")
                .resizable(false)
                .exact_width(SIDE_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Undo move").clicked() {
                            self.game_manager.undo();
                        }

                        if ui.button("Reset").clicked() {
                            self.game_manager.reset();
                        }
                    });

                    ui.separator();

                    self.game_manager.ui_move_history(ui);
                });

            egui::TopBottomPanel::bottom("bottom_panel")
                .exact_height(STATUS_BAR_HEIGHT)
                .show(ctx, |ui| {
                    let game = self.game_manager.game();
                    ui.horizontal_centered(|ui| {
                        ui.label(format!("{} to move", game.to_move()));
                        ui.separator();
                        ui.label(game.board().placement());
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.with_layout(
                    Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| self.game_manager.ui_board(ui),
                );
            });
    }
}

fn window_size(board_size: f32, show_side_panel: bool) -> Vec2 {
    if show_side_panel {
        Vec2::new(board_size + SIDE_PANEL_WIDTH, board_size + STATUS_BAR_HEIGHT)
    } else {
        Vec2::splat(board_size)
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Everything that can fail is loaded before the window opens.
    let images = if args.lettered {
        info!("drawing lettered pieces");
        None
    } else {
        Some(PieceImages::load_dir(&args.assets)?)
    };

    let style = BoardStyle::new(args.tile_size as f32);
    let show_side_panel = args.side_panel;
    let game = GameState::with_board(args.position);

    info!(
        "starting with placement {} and {}pt squares",
        args.position.placement(),
        args.tile_size
    );

    eframe::run_native(
        "Skakborð",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size(style.board_size(), show_side_panel))
                .with_resizable(false),
            ..Default::default()
        },
        Box::new(move |cc| {
            Ok(Box::new(SkakbordApp::new(
                &cc.egui_ctx,
                game,
                images,
                style,
                show_side_panel,
            )))
        }),
    )?;

    info!("window closed");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
