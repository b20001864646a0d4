use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use brotscope_core::ZoomSettings;
use brotscope_render::{Palette, TILE_COLUMNS};

// ---------------------------------------------------------------------------
// Palette colors
// ---------------------------------------------------------------------------

/// The two gradient endpoints as `#RRGGBB` or `#RRGGBBAA` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
}

fn default_background() -> String {
    format!("#{:08X}", Palette::DEFAULT_BACKGROUND)
}
fn default_foreground() -> String {
    format!("#{:08X}", Palette::DEFAULT_FOREGROUND)
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
        }
    }
}

impl PaletteConfig {
    /// Resolve to a [`Palette`]; an unparsable entry falls back to its default.
    pub fn to_palette(&self) -> Palette {
        let defaults = Palette::default();
        let resolve = |text: &str, fallback: [u8; 4], name: &str| {
            parse_hex_color(text).unwrap_or_else(|| {
                warn!("Invalid {name} color {text:?} in config, using default");
                fallback
            })
        };
        Palette::new(
            resolve(&self.background, defaults.background, "background"),
            resolve(&self.foreground, defaults.foreground, "foreground"),
        )
    }
}

/// Parse `#RRGGBB` (opaque) or `#RRGGBBAA`. The leading `#` is optional.
pub fn parse_hex_color(text: &str) -> Option<[u8; 4]> {
    let hex = text.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let packed = match hex.len() {
        6 => (u32::from_str_radix(hex, 16).ok()? << 8) | 0xFF,
        8 => u32::from_str_radix(hex, 16).ok()?,
        _ => return None,
    };
    Some(packed.to_be_bytes())
}

// ---------------------------------------------------------------------------
// Application config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub zoom: ZoomSettings,
    /// Columns per parallel work unit.
    #[serde(default = "default_tile_columns")]
    pub tile_columns: u32,
    /// Size of the global rayon pool. `None` lets rayon pick.
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default = "default_true")]
    pub show_hud: bool,
}

fn default_window_width() -> f32 {
    800.0
}
fn default_window_height() -> f32 {
    600.0
}
fn default_tile_columns() -> u32 {
    TILE_COLUMNS
}
fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            zoom: ZoomSettings::default(),
            tile_columns: default_tile_columns(),
            worker_threads: None,
            palette: PaletteConfig::default(),
            show_hud: true,
        }
    }
}

impl AppConfig {
    /// Load `config.json` next to the executable, or defaults.
    pub fn load() -> Self {
        Self::load_from(&crate::app_dir::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<AppConfig>(&json) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        return config.validated();
                    }
                    Err(e) => {
                        error!("Failed to parse config: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read config file: {e}");
                }
            }
        } else {
            debug!("No config file at {}", path.display());
        }
        Self::default()
    }

    pub fn save(&self) {
        self.save_to(&crate::app_dir::config_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write config: {e}");
                } else {
                    debug!("Saved config");
                }
            }
            Err(e) => error!("Failed to serialize config: {e}"),
        }
    }

    /// Replace out-of-range values with defaults, logging each one.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(self.window_width >= 1.0 && self.window_height >= 1.0) {
            warn!(
                "Window size {}x{} is invalid, using default",
                self.window_width, self.window_height
            );
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }

        let zoom_in = self.zoom.zoom_in_factor;
        if !(zoom_in > 0.0 && zoom_in < 1.0) {
            warn!("zoom_in_factor {zoom_in} must be in (0, 1), using default");
            self.zoom.zoom_in_factor = defaults.zoom.zoom_in_factor;
        }
        let zoom_out = self.zoom.zoom_out_factor;
        if !(zoom_out > 1.0 && zoom_out.is_finite()) {
            warn!("zoom_out_factor {zoom_out} must be > 1, using default");
            self.zoom.zoom_out_factor = defaults.zoom.zoom_out_factor;
        }

        if self.tile_columns == 0 {
            warn!("tile_columns must be positive, using {TILE_COLUMNS}");
            self.tile_columns = defaults.tile_columns;
        }

        if self.worker_threads == Some(0) {
            warn!("worker_threads = 0 ignored, letting rayon choose");
            self.worker_threads = None;
        }

        self
    }
}
