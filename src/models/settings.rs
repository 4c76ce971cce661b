use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Folder containing front/, back/, bgd.png and the pixel font
    pub assets_dir: String,
    /// Pixel font file name inside the assets folder
    pub font_file: String,
    /// Seconds between automatically triggered battle turns (1-600)
    pub swap_seconds: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            font_file: "pkmn.ttf".to_string(),
            swap_seconds: 30.0,
        }
    }
}

impl AppSettings {
    /// Clamps the auto-battle interval to a valid range (1-600 seconds)
    pub fn set_swap_seconds(&mut self, seconds: f32) {
        self.swap_seconds = seconds.clamp(1.0, 600.0);
    }
}
