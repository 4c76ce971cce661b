pub mod assets;
pub mod battle;
pub mod gui;
pub mod models;
pub mod utils;

pub use assets::{SpriteAsset, SpriteLibrary};
pub use battle::{
    Axis, BattleController, BattleTurn, EntropyRandom, RandomSource, SlideAnimator, SlidePhase,
    Travel, TurnEvent, TurnPhase,
};
pub use models::{AppSettings, Combatant, Slot};
pub use utils::clamp01;

#[cfg(test)]
mod test;
