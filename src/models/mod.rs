pub mod combatant;
pub mod settings;

pub use combatant::{Combatant, Slot};
pub use settings::AppSettings;
