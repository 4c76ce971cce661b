use crate::battle::rng::RandomSource;
use crate::models::Slot;
use crate::utils::clamp01;

pub const ATTACK_OUT_SECS: f32 = 0.14;
pub const ATTACK_BACK_SECS: f32 = 0.12;
pub const HIT_FLASH_SECS: f32 = 0.35;
pub const COOLDOWN_SECS: f32 = 0.18;
/// The flash alternates over six equal slices of the hit-flash window.
pub const FLASH_SLICES: u32 = 6;
/// Maximum horizontal lunge distance in pixels.
pub const LUNGE_DISTANCE: f32 = 28.0;
pub const DAMAGE_MIN: u32 = 6;
pub const DAMAGE_MAX: u32 = 18;

/// Phases of one attack, visited strictly in order. No phase is revisited
/// within one turn instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AttackOut,
    AttackBack,
    HitFlash,
    Cooldown,
}

/// Transition reported by `update` so the controller never has to diff
/// phases itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The attack connected (AttackBack finished). Apply damage now,
    /// exactly once.
    Impact,
    /// Cooldown finished; the turn is over.
    Finished,
}

/// One combat turn between an attacker and a defender. Created per turn and
/// discarded once finished.
pub struct BattleTurn {
    pub attacker: Slot,
    pub defender: Slot,
    phase: TurnPhase,
    elapsed: f32,
    offset_x: f32,
    flash_on: bool,
    /// Rolled once at creation, immutable afterwards. Hundredths of a full
    /// health bar.
    damage: u32,
}

impl BattleTurn {
    pub fn new(attacker: Slot, rng: &mut dyn RandomSource) -> Self {
        Self {
            attacker,
            defender: attacker.other(),
            phase: TurnPhase::Idle,
            elapsed: 0.0,
            offset_x: 0.0,
            flash_on: false,
            damage: rng.roll_range(DAMAGE_MIN, DAMAGE_MAX),
        }
    }

    /// Kicks the turn off. Only valid from Idle; anywhere else this is a
    /// no-op.
    pub fn start(&mut self) {
        if self.phase != TurnPhase::Idle {
            return;
        }
        self.phase = TurnPhase::AttackOut;
        self.elapsed = 0.0;
    }

    /// Advances the phase timer. At most one phase transition happens per
    /// call; time past a phase boundary is discarded.
    pub fn update(&mut self, dt: f32) -> Option<TurnEvent> {
        match self.phase {
            TurnPhase::Idle => None,
            TurnPhase::AttackOut => {
                self.elapsed += dt;
                let u = clamp01(self.elapsed / ATTACK_OUT_SECS);
                self.offset_x = LUNGE_DISTANCE * u * u;
                if u >= 1.0 {
                    self.phase = TurnPhase::AttackBack;
                    self.elapsed = 0.0;
                }
                None
            }
            TurnPhase::AttackBack => {
                self.elapsed += dt;
                let u = clamp01(self.elapsed / ATTACK_BACK_SECS);
                self.offset_x = LUNGE_DISTANCE * (1.0 - u) * (1.0 - u);
                if u >= 1.0 {
                    self.phase = TurnPhase::HitFlash;
                    self.elapsed = 0.0;
                    // First flash slice starts lit.
                    self.flash_on = true;
                    return Some(TurnEvent::Impact);
                }
                None
            }
            TurnPhase::HitFlash => {
                self.elapsed += dt;
                let slice = HIT_FLASH_SECS / FLASH_SLICES as f32;
                self.flash_on = (self.elapsed / slice) as u32 % 2 == 0;
                if self.elapsed >= HIT_FLASH_SECS {
                    self.flash_on = false;
                    self.phase = TurnPhase::Cooldown;
                    self.elapsed = 0.0;
                }
                None
            }
            TurnPhase::Cooldown => {
                self.elapsed += dt;
                if self.elapsed >= COOLDOWN_SECS {
                    self.phase = TurnPhase::Idle;
                    return Some(TurnEvent::Finished);
                }
                None
            }
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True only once the turn has run its full course back to Idle.
    pub fn done(&self) -> bool {
        self.phase == TurnPhase::Idle
    }

    /// Horizontal lunge offset for the attacker sprite this frame.
    pub fn offset_x(&self) -> f32 {
        match self.phase {
            TurnPhase::AttackOut | TurnPhase::AttackBack => self.offset_x,
            _ => 0.0,
        }
    }

    /// Whether the defender sprite should be flashed this frame.
    pub fn flash_on(&self) -> bool {
        self.phase == TurnPhase::HitFlash && self.flash_on
    }

    /// Rolled damage as a health fraction.
    pub fn damage_fraction(&self) -> f32 {
        self.damage as f32 / 100.0
    }
}
