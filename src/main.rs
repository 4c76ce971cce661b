use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use std::error::Error;

// Module declarations
mod assets;
mod battle;
mod gui;
mod models;
mod utils;

use gui::BattleClockApp;
use gui::hud::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), Box<dyn Error>> {
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("Battle Clock"),
        ..Default::default()
    };

    eframe::run_native(
        "Battle Clock",
        native_options,
        Box::new(|cc| Ok(Box::new(BattleClockApp::new(cc)))),
    )?;

    Ok(())
}
