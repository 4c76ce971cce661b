pub mod app;
pub mod hud;

pub use app::BattleClockApp;
