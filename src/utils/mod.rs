pub mod math;
pub mod settings_persistence;
pub mod time;

pub use math::clamp01;
pub use settings_persistence::{
    auto_save_app_settings, load_app_settings, parse_app_settings, save_app_settings,
};
pub use time::{clock_text, current_clock_text};
