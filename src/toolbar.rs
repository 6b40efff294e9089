use egui::Color32;

use crate::config::CanvasConfig;
use crate::note::{
    clamp_or, Note, NoteStyle, MAX_BORDER_WIDTH, MAX_CORNER_RADIUS, MAX_OPACITY,
    MAX_STYLE_FONT_SIZE, MIN_OPACITY, MIN_STYLE_FONT_SIZE,
};

/// The toolbar's editable style fields.
///
/// New notes are created from a snapshot of this state; selecting a note
/// overwrites it from the note; "apply formatting" pushes it back.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarState {
    style: NoteStyle,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl ToolbarState {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            style: config.default_style(),
        }
    }

    pub fn style(&self) -> &NoteStyle {
        &self.style
    }

    /// Style handed to a freshly created note
    pub fn snapshot(&self) -> NoteStyle {
        self.style.clone()
    }

    /// Pull every editable field from `note`
    pub fn load_from_note(&mut self, note: &Note) {
        self.style = note.style().clone();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.style.font_size = clamp_or(size, MIN_STYLE_FONT_SIZE, MAX_STYLE_FONT_SIZE);
    }

    pub fn set_text_color(&mut self, color: Color32) {
        self.style.text_color = color;
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.style.background_color = color;
    }

    pub fn set_border_color(&mut self, color: Color32) {
        self.style.border_color = color;
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = clamp_or(radius, 0.0, MAX_CORNER_RADIUS);
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.style.border_width = clamp_or(width, 0.0, MAX_BORDER_WIDTH);
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.style.opacity = clamp_or(opacity, MIN_OPACITY, MAX_OPACITY);
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.style.font_family = family.into();
    }
}
