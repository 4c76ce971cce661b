use std::path::PathBuf;

use eframe::egui;

use crate::assets::{install_pixel_font, load_sprite_library};
use crate::battle::{BattleController, EntropyRandom};
use crate::gui::hud::{back_slide, front_slide};
use crate::models::AppSettings;
use crate::utils::{auto_save_app_settings, load_app_settings};

pub struct BattleClockApp {
    pub settings: AppSettings,
    pub controller: BattleController,
    pub background: Option<egui::TextureHandle>,
    /// Seconds since the last automatically triggered turn.
    auto_timer: f32,
}

impl BattleClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_app_settings();

        let font_path = PathBuf::from(&settings.assets_dir).join(&settings.font_file);
        install_pixel_font(&cc.egui_ctx, &font_path);

        let library = load_sprite_library(&cc.egui_ctx, &settings);
        let controller = BattleController::new(
            library.front,
            library.back,
            front_slide(),
            back_slide(),
            Box::new(EntropyRandom::new()),
        );

        Self {
            settings,
            controller,
            background: library.background,
            auto_timer: 0.0,
        }
    }
}

impl eframe::App for BattleClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Cap dt so a stall (window dragged, machine asleep) doesn't fast
        // forward the animations.
        let dt = ctx.input(|i| i.stable_dt).min(0.1);

        let quit = ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q));
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::M) || i.key_pressed(egui::Key::Space)) {
            self.controller.start_turn();
        }

        // Screensaver mode: kick off a turn on its own every swap interval.
        self.auto_timer += dt;
        if self.auto_timer >= self.settings.swap_seconds {
            self.auto_timer = 0.0;
            self.controller.start_turn();
        }

        self.controller.update(dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_scene(ui);
            });

        // The clock and animations run with no input at all.
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        auto_save_app_settings(&self.settings);
    }
}
