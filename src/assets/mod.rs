pub mod loader;

pub use loader::{
    SpriteAsset, SpriteLibrary, install_pixel_font, list_sprite_files, load_name_labels,
    load_sprite_library, load_texture,
};
