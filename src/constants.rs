//! Fixed identifiers, window geometry and config-file locations.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

pub const APP_ID: &str = "com.siverteh.welcome";
pub const WINDOW_TITLE: &str = "Siverteh's OS";
pub const WINDOW_SIZE: [f32; 2] = [650.0, 650.0];

pub const LOGO_TEXT: &str = "SH";
pub const TITLE_TEXT: &str = "Siverteh's OS";
pub const SUBTITLE_TEXT: &str = "Hyprland Environment";

/// Color definitions written by the rofi theme generator.
const COLORS_FILE: &str = ".config/rofi/colors.rasi";
/// Keybinding reference exported by the dotfiles.
const KEYBINDINGS_FILE: &str = ".config/ml4w/welcome/keybindings.json";

/// Tab switch fade duration, seconds.
pub const TAB_TRANSITION_SECS: f32 = 0.2;

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(AppError::NoHomeDir)
}

fn home_relative(home: &Path, rel: &str) -> PathBuf {
    home.join(rel)
}

/// `~/.config/rofi/colors.rasi`
pub fn colors_file() -> Result<PathBuf> {
    Ok(home_relative(&home_dir()?, COLORS_FILE))
}

/// `~/.config/ml4w/welcome/keybindings.json`
pub fn keybindings_file() -> Result<PathBuf> {
    Ok(home_relative(&home_dir()?, KEYBINDINGS_FILE))
}
