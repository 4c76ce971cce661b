use crate::assets::SpriteAsset;
use crate::battle::rng::RandomSource;
use crate::battle::slide::SlideAnimator;
use crate::battle::turn::{BattleTurn, TurnEvent, TurnPhase};
use crate::models::{Combatant, Slot};

/// One side of the field: the current occupant, the slide animator bound to
/// the slot (not to the occupant), and the pool replacements are drawn from.
pub struct CombatSlot {
    pub combatant: Option<Combatant>,
    pub anim: SlideAnimator,
    pool: Vec<SpriteAsset>,
}

impl CombatSlot {
    fn new(pool: Vec<SpriteAsset>, anim: SlideAnimator) -> Self {
        Self {
            combatant: None,
            anim,
            pool,
        }
    }

    fn occupant_defeated(&self) -> bool {
        self.combatant.as_ref().is_some_and(|c| c.is_defeated())
    }
}

/// Owns both combatants, runs turns, applies damage on impact and swaps out
/// the loser once its exit slide has finished.
pub struct BattleController {
    front: CombatSlot,
    back: CombatSlot,
    /// Which side attacks when the next turn starts.
    turn: Slot,
    /// At most one turn is live at a time.
    active: Option<BattleTurn>,
    /// Side whose loser is sliding out, waiting for a fresh pick.
    pending_replacement: Option<Slot>,
    rng: Box<dyn RandomSource>,
}

impl BattleController {
    pub fn new(
        front_pool: Vec<SpriteAsset>,
        back_pool: Vec<SpriteAsset>,
        front_anim: SlideAnimator,
        back_anim: SlideAnimator,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let mut controller = Self {
            front: CombatSlot::new(front_pool, front_anim),
            back: CombatSlot::new(back_pool, back_anim),
            turn: Slot::Front,
            active: None,
            pending_replacement: None,
            rng,
        };
        controller.pick_occupant(Slot::Front);
        controller.pick_occupant(Slot::Back);
        controller
    }

    pub fn slot(&self, side: Slot) -> &CombatSlot {
        match side {
            Slot::Front => &self.front,
            Slot::Back => &self.back,
        }
    }

    pub fn slot_mut(&mut self, side: Slot) -> &mut CombatSlot {
        match side {
            Slot::Front => &mut self.front,
            Slot::Back => &mut self.back,
        }
    }

    pub fn combatant(&self, side: Slot) -> Option<&Combatant> {
        self.slot(side).combatant.as_ref()
    }

    pub fn turn_side(&self) -> Slot {
        self.turn
    }

    pub fn has_active_turn(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_phase(&self) -> Option<TurnPhase> {
        self.active.as_ref().map(|t| t.phase())
    }

    pub fn pending_replacement(&self) -> Option<Slot> {
        self.pending_replacement
    }

    /// Attacker slot and its lunge offset for this frame, if a turn is mid
    /// lunge.
    pub fn attack_offset(&self) -> Option<(Slot, f32)> {
        let turn = self.active.as_ref()?;
        let offset = turn.offset_x();
        if offset > 0.0 {
            Some((turn.attacker, offset))
        } else {
            None
        }
    }

    /// Defender slot that should be drawn flashed this frame.
    pub fn flash_target(&self) -> Option<Slot> {
        let turn = self.active.as_ref()?;
        if turn.flash_on() {
            Some(turn.defender)
        } else {
            None
        }
    }

    /// Begins a turn for whichever side is up. Declines while a turn is
    /// running or a replacement slide is in flight.
    pub fn start_turn(&mut self) {
        if self.active.is_some() || self.pending_replacement.is_some() {
            return;
        }
        let mut turn = BattleTurn::new(self.turn, self.rng.as_mut());
        turn.start();
        self.active = Some(turn);
    }

    /// Single per-frame tick: advances both slide animators, the active turn
    /// and any pending replacement.
    pub fn update(&mut self, dt: f32) {
        self.front.anim.update(dt);
        self.back.anim.update(dt);

        let event = self
            .active
            .as_mut()
            .and_then(|turn| {
                let defender = turn.defender;
                let damage = turn.damage_fraction();
                turn.update(dt).map(|e| (e, defender, damage))
            });
        if let Some((event, defender, damage)) = event {
            match event {
                TurnEvent::Impact => {
                    if let Some(c) = self.slot_mut(defender).combatant.as_mut() {
                        c.apply_damage(damage);
                    }
                }
                TurnEvent::Finished => {
                    self.active = None;
                    self.resolve_outcome();
                }
            }
        }

        if let Some(side) = self.pending_replacement {
            if self.slot(side).anim.is_idle() {
                self.pick_occupant(side);
                self.pending_replacement = None;
            }
        }
    }

    /// Turn just ended: either flip the turn order or retire the defeated
    /// side. Front is checked first, so a simultaneous double-defeat counts
    /// as a back win.
    fn resolve_outcome(&mut self) {
        let loser = if self.front.occupant_defeated() {
            Slot::Front
        } else if self.back.occupant_defeated() {
            Slot::Back
        } else {
            self.turn = self.turn.other();
            return;
        };
        let winner = loser.other();
        if let Some(c) = self.slot_mut(winner).combatant.as_mut() {
            c.restore_full();
        }
        self.slot_mut(loser).anim.exit();
        self.pending_replacement = Some(loser);
        self.turn = winner;
    }

    /// Fills a slot with a uniform pick from its pool and slides it in. An
    /// empty pool leaves the slot unset; the HUD just skips the draw.
    fn pick_occupant(&mut self, side: Slot) {
        let pick = self.rng.pick_index(self.slot(side).pool.len());
        let slot = self.slot_mut(side);
        match pick {
            Some(i) => {
                let asset = &slot.pool[i];
                slot.combatant = Some(Combatant::new(asset.name.clone(), asset.texture.clone()));
                slot.anim.enter();
            }
            None => slot.combatant = None,
        }
    }
}
