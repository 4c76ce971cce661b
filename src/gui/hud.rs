use eframe::egui;
use egui::{Align2, Color32, CornerRadius, FontId, Rect, Stroke, StrokeKind, pos2, vec2};

use crate::battle::{Axis, SlideAnimator, Travel};
use crate::gui::app::BattleClockApp;
use crate::models::Slot;
use crate::utils::{clamp01, current_clock_text};

// Logical viewport. The window is created at exactly this size.
pub const WINDOW_WIDTH: f32 = 320.0;
pub const WINDOW_HEIGHT: f32 = 240.0;

// Layout boxes, all in logical pixels.
pub const FRONT_SPRITE_POS: (f32, f32) = (180.0, -30.0);
pub const FRONT_SPRITE_SIZE: (f32, f32) = (152.0, 152.0);
pub const BACK_SPRITE_POS: (f32, f32) = (-20.0, 59.0);
pub const BACK_SPRITE_SIZE: (f32, f32) = (136.0, 136.0);

pub const FRONT_NAME_POS: (f32, f32) = (24.0, 7.0);
pub const BACK_NAME_POS: (f32, f32) = (202.0, 111.0);
pub const NAME_FONT_SIZE: f32 = 14.0;

pub const FRONT_HP_BAR_POS: (f32, f32) = (65.0, 27.0);
pub const FRONT_HP_BAR_SIZE: (f32, f32) = (100.0, 12.0);
pub const BACK_HP_BAR_POS: (f32, f32) = (191.0, 137.0);
pub const BACK_HP_BAR_SIZE: (f32, f32) = (100.0, 12.0);
pub const HP_BAR_BORDER: f32 = 2.0;

pub const TIME_POS: (f32, f32) = (70.0, 170.0);
pub const TIME_SIZE: (f32, f32) = (200.0, 50.0);
pub const TIME_FONT_SIZE: f32 = 24.0;

const FULL_UV: Rect = Rect {
    min: pos2(0.0, 0.0),
    max: pos2(1.0, 1.0),
};
const FLASH_OVERLAY: Color32 = Color32::from_rgba_premultiplied(150, 150, 150, 150);
const HP_FILL: Color32 = Color32::from_rgb(0, 200, 0);

/// Slide animator for the front slot: drops in from above the window.
pub fn front_slide() -> SlideAnimator {
    SlideAnimator::new(
        FRONT_SPRITE_POS,
        FRONT_SPRITE_SIZE,
        Axis::Y,
        Travel::Negative,
        SlideAnimator::DEFAULT_DURATION,
        (WINDOW_WIDTH, WINDOW_HEIGHT),
    )
}

/// Slide animator for the back slot: slides in from the left edge.
pub fn back_slide() -> SlideAnimator {
    SlideAnimator::new(
        BACK_SPRITE_POS,
        BACK_SPRITE_SIZE,
        Axis::X,
        Travel::Negative,
        SlideAnimator::DEFAULT_DURATION,
        (WINDOW_WIDTH, WINDOW_HEIGHT),
    )
}

impl BattleClockApp {
    pub fn draw_scene(&self, ui: &mut egui::Ui) {
        let painter = ui.painter();
        let rect = ui.max_rect();

        match &self.background {
            Some(tex) => painter.image(tex.id(), rect, FULL_UV, Color32::WHITE),
            None => painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE),
        };

        let attack = self.controller.attack_offset();
        let flash = self.controller.flash_target();
        self.draw_sprite(painter, Slot::Front, attack, flash);
        self.draw_sprite(painter, Slot::Back, attack, flash);

        if let Some(front) = self.controller.combatant(Slot::Front) {
            draw_hp_bar(painter, FRONT_HP_BAR_POS, FRONT_HP_BAR_SIZE, front.hp);
            draw_name(painter, FRONT_NAME_POS, &front.name);
        }
        if let Some(back) = self.controller.combatant(Slot::Back) {
            draw_hp_bar(painter, BACK_HP_BAR_POS, BACK_HP_BAR_SIZE, back.hp);
            draw_name(painter, BACK_NAME_POS, &back.name);
        }

        draw_clock(painter);
    }

    fn draw_sprite(
        &self,
        painter: &egui::Painter,
        slot: Slot,
        attack: Option<(Slot, f32)>,
        flash: Option<Slot>,
    ) {
        let Some(combatant) = self.controller.combatant(slot) else {
            return;
        };
        let Some(texture) = &combatant.sprite else {
            return;
        };
        let anim = &self.controller.slot(slot).anim;
        let (mut x, y) = anim.position();
        if let Some((attacker, offset)) = attack {
            if attacker == slot {
                // The front sprite lunges left toward its opponent, the back
                // sprite lunges right.
                match slot {
                    Slot::Front => x -= offset,
                    Slot::Back => x += offset,
                }
            }
        }
        let (w, h) = anim.size();
        let sprite_rect = Rect::from_min_size(pos2(x, y), vec2(w, h));
        painter.image(texture.id(), sprite_rect, FULL_UV, Color32::WHITE);
        if flash == Some(slot) {
            painter.rect_filled(sprite_rect, CornerRadius::ZERO, FLASH_OVERLAY);
        }
    }
}

fn draw_hp_bar(painter: &egui::Painter, pos: (f32, f32), size: (f32, f32), value: f32) {
    let v = clamp01(value);
    let outer = Rect::from_min_size(pos2(pos.0, pos.1), vec2(size.0, size.1));
    let fill_width = (size.0 - 2.0 * HP_BAR_BORDER) * v;
    if fill_width > 0.0 {
        let inner = Rect::from_min_size(
            pos2(pos.0 + HP_BAR_BORDER, pos.1 + HP_BAR_BORDER),
            vec2(fill_width, size.1 - 2.0 * HP_BAR_BORDER),
        );
        painter.rect_filled(inner, CornerRadius::ZERO, HP_FILL);
    }
    painter.rect_stroke(
        outer,
        CornerRadius::ZERO,
        Stroke::new(HP_BAR_BORDER, Color32::BLACK),
        StrokeKind::Inside,
    );
}

fn draw_name(painter: &egui::Painter, pos: (f32, f32), name: &str) {
    if name.is_empty() {
        return;
    }
    painter.text(
        pos2(pos.0, pos.1),
        Align2::LEFT_TOP,
        name,
        FontId::proportional(NAME_FONT_SIZE),
        Color32::BLACK,
    );
}

/// HH:MM wall clock centered in its box, colon blinking once a second.
fn draw_clock(painter: &egui::Painter) {
    let center = pos2(
        TIME_POS.0 + TIME_SIZE.0 / 2.0,
        TIME_POS.1 + TIME_SIZE.1 / 2.0,
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        current_clock_text(),
        FontId::proportional(TIME_FONT_SIZE),
        Color32::BLACK,
    );
}
