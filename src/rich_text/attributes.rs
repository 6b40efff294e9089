/// Font size reported when a range covers no run at all.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;
/// Smallest size reachable through grow/shrink.
pub const MIN_FONT_SIZE: f32 = 10.0;
/// Largest size reachable through grow/shrink.
pub const MAX_FONT_SIZE: f32 = 32.0;
/// Increment used by grow/shrink.
pub const FONT_SIZE_STEP: f32 = 2.0;

/// Boolean face traits that can be toggled on a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Bold,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Strikethrough,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Italic => "italic",
            Attribute::Underline => "underline",
            Attribute::Strikethrough => "strikethrough",
        }
    }
}

/// The attribute set shared by every character of a run
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_size: f32,
    /// `None` inherits the owning note's family
    pub font_family: Option<String>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

impl TextAttributes {
    pub fn new(font_size: f32) -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            font_size,
            font_family: None,
        }
    }

    pub fn with(mut self, attribute: Attribute, value: bool) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn with_bold(self, bold: bool) -> Self {
        self.with(Attribute::Bold, bold)
    }

    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Strikethrough => self.strikethrough,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: bool) {
        match attribute {
            Attribute::Bold => self.bold = value,
            Attribute::Italic => self.italic = value,
            Attribute::Underline => self.underline = value,
            Attribute::Strikethrough => self.strikethrough = value,
        }
    }
}

/// Clamp a font size into the grow/shrink bounds
pub fn clamp_font_size(size: f32) -> f32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut attrs = TextAttributes::new(14.0);
        for attribute in Attribute::ALL {
            assert!(!attrs.get(attribute));
            attrs.set(attribute, true);
            assert!(attrs.get(attribute));
        }
        assert_eq!(attrs.font_size, 14.0);
    }

    #[test]
    fn test_clamp_font_size() {
        assert_eq!(clamp_font_size(4.0), MIN_FONT_SIZE);
        assert_eq!(clamp_font_size(40.0), MAX_FONT_SIZE);
        assert_eq!(clamp_font_size(18.0), 18.0);
    }
}
