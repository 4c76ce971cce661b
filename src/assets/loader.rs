use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

use crate::models::AppSettings;

const NAME_LABELS_FILE: &str = "names.json";
const BACKGROUND_FILE: &str = "bgd.png";

/// One loadable identity: display label plus its uploaded texture. A missing
/// or undecodable image leaves the texture empty; the identity is still
/// usable, nothing gets drawn for it.
#[derive(Clone)]
pub struct SpriteAsset {
    pub name: String,
    pub texture: Option<egui::TextureHandle>,
}

/// Everything the battle display needs from the assets folder.
pub struct SpriteLibrary {
    pub front: Vec<SpriteAsset>,
    pub back: Vec<SpriteAsset>,
    pub background: Option<egui::TextureHandle>,
}

/// Ordered list of the PNG files in a folder. Missing folder means an empty
/// pool, not an error.
pub fn list_sprite_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map_or(false, |e| e.eq_ignore_ascii_case("png"))
        })
        .collect();
    files.sort();
    files
}

/// Decodes a PNG and uploads it as a nearest-filtered texture (pixel art).
pub fn load_texture(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Could not read image {}: {}", path.display(), e);
            return None;
        }
    };
    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Could not decode image {}: {}", path.display(), e);
            return None;
        }
    };
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sprite")
        .to_string();
    Some(ctx.load_texture(name, color_image, egui::TextureOptions::NEAREST))
}

/// Optional stem -> display label overrides living next to the sprites.
/// Absent or malformed file degrades to an empty map.
pub fn load_name_labels(assets_dir: &Path) -> HashMap<String, String> {
    let path = assets_dir.join(NAME_LABELS_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return HashMap::new();
    };
    match serde_json::from_str(&content) {
        Ok(labels) => labels,
        Err(e) => {
            eprintln!("Error parsing {}: {}. Ignoring labels.", path.display(), e);
            HashMap::new()
        }
    }
}

fn display_name(path: &Path, labels: &HashMap<String, String>) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("?");
    labels
        .get(stem)
        .cloned()
        .unwrap_or_else(|| stem.to_uppercase())
}

fn load_pool(
    ctx: &egui::Context,
    dir: &Path,
    labels: &HashMap<String, String>,
) -> Vec<SpriteAsset> {
    list_sprite_files(dir)
        .iter()
        .map(|path| SpriteAsset {
            name: display_name(path, labels),
            texture: load_texture(ctx, path),
        })
        .collect()
}

/// Scans the assets folder once at startup.
pub fn load_sprite_library(ctx: &egui::Context, settings: &AppSettings) -> SpriteLibrary {
    let assets_dir = PathBuf::from(&settings.assets_dir);
    let labels = load_name_labels(&assets_dir);
    let front = load_pool(ctx, &assets_dir.join("front"), &labels);
    let back = load_pool(ctx, &assets_dir.join("back"), &labels);
    println!(
        "Loaded {} front and {} back sprites from {}",
        front.len(),
        back.len(),
        assets_dir.display()
    );
    SpriteLibrary {
        front,
        back,
        background: load_texture(ctx, &assets_dir.join(BACKGROUND_FILE)),
    }
}

/// Installs the pixel font as the preferred proportional font. Falls back to
/// egui's built-in fonts when the file is missing.
pub fn install_pixel_font(ctx: &egui::Context, path: &Path) {
    let Ok(bytes) = fs::read(path) else {
        println!("Pixel font {} not found, using default font", path.display());
        return;
    };
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "pixel".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, "pixel".to_owned());
    ctx.set_fonts(fonts);
}
