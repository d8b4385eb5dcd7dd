//! Colour-conversion plugin detection
//!
//! Hex colours and gradients only render in the client when the colour
//! converter plugin is installed alongside the game.

use std::fs;
use std::path::{Path, PathBuf};

/// File name of the client plugin, compared case-insensitively
pub const COLOR_CONVERTER_PLUGIN: &str = "RaiRai.ColorConverterAPI.dll";

/// Client plugin directory relative to a server mod directory
///
/// Mods live in `<game>/user/mods/<mod>`; plugins in `<game>/BepInEx/plugins`.
pub fn default_plugin_dir(mod_dir: &Path) -> PathBuf {
    mod_dir.join("../../..").join("BepInEx").join("plugins")
}

/// Whether the colour converter plugin is present in `plugin_dir`
///
/// A missing or unreadable directory counts as not installed.
pub fn is_color_converter_installed(plugin_dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(plugin_dir) else {
        return false;
    };

    entries
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().eq_ignore_ascii_case(COLOR_CONVERTER_PLUGIN))
}
