use eframe::egui;

use crate::utils::clamp01;

/// The two fixed combatant slots on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The large sprite in the upper-right (player perspective: the opponent).
    Front,
    /// The smaller sprite in the lower-left.
    Back,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::Front => Slot::Back,
            Slot::Back => Slot::Front,
        }
    }
}

/// One creature currently occupying a slot.
///
/// Identity (name + sprite) is fixed for the combatant's lifetime; only
/// health changes. A combatant with no texture is still a valid combatant,
/// the presentation layer just skips its draw.
#[derive(Clone)]
pub struct Combatant {
    pub name: String,
    pub sprite: Option<egui::TextureHandle>,
    /// Health as a fraction in [0, 1].
    pub hp: f32,
}

impl Combatant {
    pub fn new(name: String, sprite: Option<egui::TextureHandle>) -> Self {
        Self {
            name,
            sprite,
            hp: 1.0,
        }
    }

    /// Applies a damage fraction, clamping health into [0, 1].
    pub fn apply_damage(&mut self, fraction: f32) {
        self.hp = clamp01(self.hp - fraction);
    }

    pub fn restore_full(&mut self) {
        self.hp = 1.0;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0.0
    }
}
