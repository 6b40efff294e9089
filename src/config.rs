use std::path::Path;

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::collection::PaletteEntry;
use crate::error::{ConfigError, ConfigResult};
use crate::note::{MIN_NOTE_SIZE, NoteStyle};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "STICKY_CANVAS_CONFIG";

/// Smallest `min_zoom` a config may ask for
pub const MIN_ZOOM_FLOOR: f32 = 0.01;

/// An sRGB colour as it appears in config files
pub type Rgb = [u8; 3];

/// Tunables for the canvas. Every field falls back to its default when
/// missing from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Size of a freshly created note, in canvas units
    pub default_note_size: [f32; 2],
    /// Text placed in a freshly created note
    pub default_note_text: String,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    /// Grid spacing at zoom 1.0
    pub base_grid_size: f32,
    /// Height of the drag strip at the top of a note, in canvas units
    pub header_height: f32,
    /// Side of the bottom-right resize square, in canvas units
    pub resize_handle_size: f32,
    pub default_font_size: f32,
    pub default_font_family: String,
    pub default_text_color: Rgb,
    pub default_corner_radius: f32,
    pub default_border_width: f32,
    pub default_opacity: f32,
    /// `(background, border)` pairs, cycled in creation order
    pub palette: Vec<(Rgb, Rgb)>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_note_size: [200.0, 150.0],
            default_note_text: "New note".to_owned(),
            min_zoom: 0.1,
            max_zoom: 2.0,
            zoom_step: 0.1,
            base_grid_size: 20.0,
            header_height: 28.0,
            resize_handle_size: 20.0,
            default_font_size: 16.0,
            default_font_family: "System".to_owned(),
            default_text_color: [33, 33, 33],
            default_corner_radius: 8.0,
            default_border_width: 1.0,
            default_opacity: 1.0,
            palette: vec![
                ([255, 249, 196], [251, 192, 45]),
                ([248, 187, 208], [236, 64, 122]),
                ([187, 222, 251], [30, 136, 229]),
                ([200, 230, 201], [67, 160, 71]),
                ([255, 224, 178], [251, 140, 0]),
                ([225, 190, 231], [142, 36, 170]),
            ],
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to the
    /// defaults when unset or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min_zoom >= MIN_ZOOM_FLOOR) {
            return Err(ConfigError::InvalidValue(format!(
                "min_zoom must be at least {}, got {}",
                MIN_ZOOM_FLOOR, self.min_zoom
            )));
        }
        if self.max_zoom < self.min_zoom {
            return Err(ConfigError::InvalidValue(format!(
                "max_zoom {} is below min_zoom {}",
                self.max_zoom, self.min_zoom
            )));
        }
        if !(self.zoom_step > 0.0) {
            return Err(ConfigError::InvalidValue("zoom_step must be above 0".to_owned()));
        }
        if !(self.base_grid_size > 0.0) {
            return Err(ConfigError::InvalidValue("base_grid_size must be above 0".to_owned()));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::InvalidValue("palette must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn default_note_size(&self) -> Vec2 {
        let [width, height] = self.default_note_size;
        Vec2::new(width, height).max(MIN_NOTE_SIZE)
    }

    pub fn palette(&self) -> Vec<PaletteEntry> {
        self.palette
            .iter()
            .map(|&(background, border)| PaletteEntry {
                background: rgb(background),
                border: rgb(border),
            })
            .collect()
    }

    /// Toolbar style before any note has been selected
    pub fn default_style(&self) -> NoteStyle {
        let first = self.palette().first().copied().unwrap_or_default();
        NoteStyle {
            font_size: self.default_font_size,
            text_color: rgb(self.default_text_color),
            background_color: first.background,
            border_color: first.border,
            corner_radius: self.default_corner_radius,
            border_width: self.default_border_width,
            opacity: self.default_opacity,
            font_family: self.default_font_family.clone(),
        }
        .clamped()
    }
}

fn rgb([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json(r#"{ "max_zoom": 3.0 }"#).unwrap();
        assert_eq!(config.max_zoom, 3.0);
        assert_eq!(config.min_zoom, 0.1);
        assert_eq!(config.palette.len(), 6);
    }

    #[test]
    fn test_rejects_zero_min_zoom() {
        let err = CanvasConfig::from_json(r#"{ "min_zoom": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_rejects_tiny_min_zoom() {
        let err = CanvasConfig::from_json(r#"{ "min_zoom": 1e-9 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
        assert!(CanvasConfig::from_json(r#"{ "min_zoom": 0.01 }"#).is_ok());
    }

    #[test]
    fn test_rejects_empty_palette() {
        assert!(CanvasConfig::from_json(r#"{ "palette": [] }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = CanvasConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
