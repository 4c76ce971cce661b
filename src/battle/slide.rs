use crate::utils::clamp01;

/// Which screen axis a sprite slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which way the sprite travels to leave the screen: Negative exits past the
/// top/left edge, Positive past the bottom/right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Travel {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    Idle,
    Entering,
    Exiting,
}

/// Drives one sprite's on/off-screen slide. One instance per combatant slot;
/// a replacement combatant reuses the same animator.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    base_x: f32,
    base_y: f32,
    width: f32,
    height: f32,
    axis: Axis,
    travel: Travel,
    duration: f32,
    viewport_w: f32,
    viewport_h: f32,
    phase: SlidePhase,
    elapsed: f32,
}

impl SlideAnimator {
    pub const DEFAULT_DURATION: f32 = 0.4;

    pub fn new(
        base: (f32, f32),
        size: (f32, f32),
        axis: Axis,
        travel: Travel,
        duration: f32,
        viewport: (f32, f32),
    ) -> Self {
        Self {
            base_x: base.0,
            base_y: base.1,
            width: size.0,
            height: size.1,
            axis,
            travel,
            duration,
            viewport_w: viewport.0,
            viewport_h: viewport.1,
            phase: SlidePhase::Idle,
            elapsed: 0.0,
        }
    }

    pub fn enter(&mut self) {
        self.phase = SlidePhase::Entering;
        self.elapsed = 0.0;
    }

    pub fn exit(&mut self) {
        self.phase = SlidePhase::Exiting;
        self.elapsed = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.phase == SlidePhase::Idle {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.phase = SlidePhase::Idle;
        }
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SlidePhase::Idle
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Coordinate on the motion axis where the sprite is fully off screen.
    fn offscreen(&self) -> f32 {
        match (self.axis, self.travel) {
            (Axis::X, Travel::Negative) => -self.width,
            (Axis::X, Travel::Positive) => self.viewport_w,
            (Axis::Y, Travel::Negative) => -self.height,
            (Axis::Y, Travel::Positive) => self.viewport_h,
        }
    }

    /// Current top-left position for this frame.
    pub fn position(&self) -> (f32, f32) {
        let (base, off) = match self.axis {
            Axis::X => (self.base_x, self.offscreen()),
            Axis::Y => (self.base_y, self.offscreen()),
        };
        let along = match self.phase {
            SlidePhase::Idle => base,
            SlidePhase::Entering => {
                let u = clamp01(self.elapsed / self.duration);
                off + (base - off) * u
            }
            SlidePhase::Exiting => {
                let u = clamp01(self.elapsed / self.duration);
                base + (off - base) * u
            }
        };
        match self.axis {
            Axis::X => (along, self.base_y),
            Axis::Y => (self.base_x, along),
        }
    }
}
