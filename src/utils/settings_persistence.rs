use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::AppSettings;

const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_file_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE)
}

/// Parses a settings JSON document, re-clamping values the file may carry
/// out of range. Malformed content degrades to the defaults.
pub fn parse_app_settings(content: &str) -> AppSettings {
    match serde_json::from_str::<AppSettings>(content) {
        Ok(mut settings) => {
            settings.set_swap_seconds(settings.swap_seconds);
            settings
        }
        Err(e) => {
            eprintln!("Error parsing settings JSON: {}. Using defaults.", e);
            AppSettings::default()
        }
    }
}

pub fn load_app_settings() -> AppSettings {
    let file_path = get_settings_file_path();

    if !file_path.exists() {
        println!("No existing settings found, using defaults");
        return AppSettings::default();
    }

    match fs::read_to_string(&file_path) {
        Ok(content) => {
            let settings = parse_app_settings(&content);
            println!(
                "Loaded settings: assets dir '{}', font '{}', swap every {}s",
                settings.assets_dir, settings.font_file, settings.swap_seconds
            );
            settings
        }
        Err(e) => {
            eprintln!("Error reading settings file: {}. Using defaults.", e);
            AppSettings::default()
        }
    }
}

pub fn save_app_settings(settings: &AppSettings) -> io::Result<()> {
    let file_path = get_settings_file_path();

    let json_content = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::other(format!("JSON serialization error: {}", e)))?;

    let mut file = fs::File::create(&file_path)?;
    file.write_all(json_content.as_bytes())?;
    file.flush()?;

    Ok(())
}

pub fn auto_save_app_settings(settings: &AppSettings) {
    if let Err(e) = save_app_settings(settings) {
        eprintln!("Failed to auto-save settings: {}", e);
    }
}
