//! Menu Configuration
//!
//! JSON settings for the menu window, colors, and button layout. Every field
//! has a default, so a config file only needs the values it changes.

use crate::error::MenuError;
use crate::layout::{SizingMode, BUTTON_PADDING};
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bundled config shipped next to the assets
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/menu.json";

/// Directory under the platform config dir that holds user overrides
const USER_CONFIG_DIR: &str = "main-menu";
const CONFIG_FILE_NAME: &str = "menu.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    pub title: String,
    /// Top edge of the title text
    pub title_y: i32,
    pub title_color: [u8; 4],

    pub clear_color: [u8; 4],
    /// Stretched over the whole window. Empty means no background; a path
    /// that fails to load is logged and skipped.
    pub background_image: String,

    /// Bitmap font scale (1 = 5x7 pixel glyphs)
    pub text_scale: u32,

    pub button_padding: u32,
    pub corner_radius: i32,
    pub button_color: [u8; 4],
    pub label_color: [u8; 4],
    /// Top-left corners of Play Game, High Scores and Quit
    pub button_anchors: [(i32, i32); 3],
    pub sizing: SizingMode,

    pub target_fps: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            window_title: "Main Menu".to_string(),
            window_width: 800,
            window_height: 480,
            title: "Main Menu".to_string(),
            title_y: 50,
            title_color: [255, 215, 0, 255],   // gold
            clear_color: [100, 149, 237, 255], // cornflower blue
            background_image: String::new(),
            text_scale: 3,
            button_padding: BUTTON_PADDING,
            corner_radius: 20,
            button_color: [255, 69, 0, 255], // orange red
            label_color: [255, 255, 255, 255],
            button_anchors: [(300, 200), (300, 300), (300, 400)],
            sizing: SizingMode::FirstLabel,
            target_fps: 60,
        }
    }
}

/// Converts a config `[r, g, b, a]` array to an SDL color
pub fn rgba(color: [u8; 4]) -> Color {
    Color::RGBA(color[0], color[1], color[2], color[3])
}

impl MenuConfig {
    /// Background image to load, if one is configured
    pub fn background_path(&self) -> Option<&str> {
        let path = self.background_image.trim();
        if path.is_empty() { None } else { Some(path) }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        let config: MenuConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Where a user override would live, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Loads the first config found among `candidates`, else the defaults.
    ///
    /// Missing files are skipped. A file that exists but can't be read or
    /// parsed is an error rather than a silent fallback.
    pub fn load_first_existing(candidates: &[PathBuf]) -> Result<(Self, Option<PathBuf>), MenuError> {
        for path in candidates {
            if path.exists() {
                let config = Self::load_from_file(path)?;
                return Ok((config, Some(path.clone())));
            }
        }
        Ok((MenuConfig::default(), None))
    }

    /// User override, then the bundled file, then built-in defaults
    pub fn load() -> Result<Self, MenuError> {
        let mut candidates = Vec::new();
        if let Some(user_path) = Self::user_config_path() {
            candidates.push(user_path);
        }
        candidates.push(PathBuf::from(BUNDLED_CONFIG_PATH));

        let (config, source) = Self::load_first_existing(&candidates)?;
        match source {
            Some(path) => tracing::info!(path = %path.display(), "loaded menu config"),
            None => tracing::info!("no menu config found, using defaults"),
        }
        Ok(config)
    }

    /// Time budget for one frame at the configured FPS
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.target_fps.max(1)
    }
}
