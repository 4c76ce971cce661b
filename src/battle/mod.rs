pub mod controller;
pub mod rng;
pub mod slide;
pub mod turn;

pub use controller::{BattleController, CombatSlot};
pub use rng::{EntropyRandom, RandomSource};
pub use slide::{Axis, SlideAnimator, SlidePhase, Travel};
pub use turn::{BattleTurn, TurnEvent, TurnPhase};
