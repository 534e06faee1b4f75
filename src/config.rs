use macroquad::logging::warn;
use macroquad::prelude::Conf;
use serde::Deserialize;

use crate::loader::level_json::decode_level_file_to_ir;

fn default_title() -> String {
    "tilegrid".to_owned()
}
fn default_width() -> i32 {
    800
}
fn default_height() -> i32 {
    600
}
fn default_true() -> bool {
    true
}

/// Window settings, read from the `window` section of a level file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_true")]
    pub resizable: bool,
    #[serde(default)]
    pub high_dpi: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            resizable: true,
            high_dpi: false,
        }
    }
}

impl WindowSettings {
    /// Macroquad window configuration. Macroquad brings up the window and
    /// image loaders itself when its entry point runs with this.
    pub fn conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.width,
            window_height: self.height,
            window_resizable: self.resizable,
            high_dpi: self.high_dpi,
            ..Default::default()
        }
    }
}

/// Window configuration for the level at `path`, or the defaults if the
/// level cannot be read.
pub fn window_conf_from_level(path: &str) -> Conf {
    match decode_level_file_to_ir(path) {
        Ok((ir, _)) => ir.window.conf(),
        Err(e) => {
            warn!("Unable to read window settings from {}: {}", path, e);
            WindowSettings::default().conf()
        }
    }
}
