use std::fmt;

use egui::{Color32, Pos2, Vec2};
use uuid::Uuid;

use crate::rich_text::{Attribute, RichText, TextAttributes};

/// Notes never shrink below this size, in canvas units
pub const MIN_NOTE_SIZE: Vec2 = Vec2::new(100.0, 80.0);

pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 1.0;
pub const MIN_STYLE_FONT_SIZE: f32 = 10.0;
pub const MAX_STYLE_FONT_SIZE: f32 = 32.0;
pub const MAX_CORNER_RADIUS: f32 = 40.0;
pub const MAX_BORDER_WIDTH: f32 = 10.0;

/// Stable identity of a note, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whole-note style fields, also the shape of the toolbar's editable state
#[derive(Debug, Clone, PartialEq)]
pub struct NoteStyle {
    /// Baseline size, independent of per-run overrides
    pub font_size: f32,
    pub text_color: Color32,
    pub background_color: Color32,
    pub border_color: Color32,
    pub corner_radius: f32,
    pub border_width: f32,
    pub opacity: f32,
    pub font_family: String,
}

impl NoteStyle {
    /// Clamp every numeric field into its allowed range
    pub fn clamped(mut self) -> Self {
        self.font_size = clamp_or(self.font_size, MIN_STYLE_FONT_SIZE, MAX_STYLE_FONT_SIZE);
        self.corner_radius = clamp_or(self.corner_radius, 0.0, MAX_CORNER_RADIUS);
        self.border_width = clamp_or(self.border_width, 0.0, MAX_BORDER_WIDTH);
        self.opacity = clamp_or(self.opacity, MIN_OPACITY, MAX_OPACITY);
        self
    }
}

/// `clamp` that maps NaN to the lower bound
pub(crate) fn clamp_or(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    /// Top-left anchor in unscaled canvas space
    pub position: Pos2,
    size: Vec2,
    pub content: RichText,
    style: NoteStyle,
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underlined: bool,
    pub is_strikethrough: bool,
}

impl Note {
    pub fn new(position: Pos2, size: Vec2, text: &str, style: NoteStyle) -> Self {
        let style = style.clamped();
        let content = RichText::new(text, TextAttributes::new(style.font_size));
        Self {
            id: NoteId::new(),
            position,
            size: size.max(MIN_NOTE_SIZE),
            content,
            style,
            is_bold: false,
            is_italic: false,
            is_underlined: false,
            is_strikethrough: false,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Set the size, never going below [`MIN_NOTE_SIZE`]
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size.max(MIN_NOTE_SIZE);
    }

    pub fn style(&self) -> &NoteStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: NoteStyle) {
        self.style = style.clamped();
    }

    /// Default-styling flag for freshly typed text
    pub fn default_flag(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.is_bold,
            Attribute::Italic => self.is_italic,
            Attribute::Underline => self.is_underlined,
            Attribute::Strikethrough => self.is_strikethrough,
        }
    }

    pub fn set_default_flag(&mut self, attribute: Attribute, value: bool) {
        match attribute {
            Attribute::Bold => self.is_bold = value,
            Attribute::Italic => self.is_italic = value,
            Attribute::Underline => self.is_underlined = value,
            Attribute::Strikethrough => self.is_strikethrough = value,
        }
    }

    /// Attributes given to text typed into an empty note
    pub fn default_attributes(&self) -> TextAttributes {
        Attribute::ALL.into_iter().fold(
            TextAttributes::new(self.style.font_size),
            |attributes, attribute| attributes.with(attribute, self.default_flag(attribute)),
        )
    }

    /// Keep the content's base attributes in step with the note's defaults
    pub fn refresh_base_attributes(&mut self) {
        let attributes = self.default_attributes();
        self.content.set_base_attributes(attributes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> NoteStyle {
        NoteStyle {
            font_size: 16.0,
            text_color: Color32::BLACK,
            background_color: Color32::YELLOW,
            border_color: Color32::BROWN,
            corner_radius: 8.0,
            border_width: 1.0,
            opacity: 1.0,
            font_family: "System".to_owned(),
        }
    }

    #[test]
    fn test_size_is_clamped_to_minimum() {
        let mut note = Note::new(Pos2::ZERO, Vec2::new(20.0, 500.0), "", style());
        assert_eq!(note.size(), Vec2::new(100.0, 500.0));

        note.set_size(Vec2::new(150.0, 10.0));
        assert_eq!(note.size(), Vec2::new(150.0, 80.0));
    }

    #[test]
    fn test_style_is_clamped() {
        let mut wild = style();
        wild.opacity = 3.0;
        wild.border_width = -2.0;
        wild.font_size = f32::NAN;
        let note = Note::new(Pos2::ZERO, MIN_NOTE_SIZE, "", wild);
        assert_eq!(note.style().opacity, MAX_OPACITY);
        assert_eq!(note.style().border_width, 0.0);
        assert_eq!(note.style().font_size, MIN_STYLE_FONT_SIZE);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Note::new(Pos2::ZERO, MIN_NOTE_SIZE, "", style());
        let b = Note::new(Pos2::ZERO, MIN_NOTE_SIZE, "", style());
        assert_ne!(a.id(), b.id());
    }
}
