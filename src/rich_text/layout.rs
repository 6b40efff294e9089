use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontFamily, FontId, Stroke};

use super::{RichText, TextAttributes};

/// Everything a run needs besides its own attributes to become a `TextFormat`
#[derive(Debug, Clone)]
pub struct RunStyle<'a> {
    pub color: Color32,
    pub zoom_scale: f32,
    /// The owning note's family, used when a run does not override it
    pub font_family: &'a str,
    pub wrap_width: f32,
}

/// Map a family name onto one of egui's built-in families
pub fn font_family(name: &str) -> FontFamily {
    if name.to_ascii_lowercase().contains("mono") || name.eq_ignore_ascii_case("courier") {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

pub fn text_format(attributes: &TextAttributes, style: &RunStyle<'_>) -> TextFormat {
    let family = attributes.font_family.as_deref().unwrap_or(style.font_family);
    let line = Stroke::new((style.zoom_scale).max(0.5), style.color);
    TextFormat {
        font_id: FontId::new(attributes.font_size * style.zoom_scale, font_family(family)),
        color: style.color,
        italics: attributes.italic,
        underline: if attributes.underline { line } else { Stroke::NONE },
        strikethrough: if attributes.strikethrough { line } else { Stroke::NONE },
        // The default fonts ship no bold face, widen the glyph spacing instead.
        extra_letter_spacing: if attributes.bold { 0.6 * style.zoom_scale } else { 0.0 },
        ..Default::default()
    }
}

/// Build a wrapped layout job with one section per run
pub fn to_layout_job(content: &RichText, style: &RunStyle<'_>) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = style.wrap_width;
    for (text, attributes) in content.run_slices() {
        job.append(text, 0.0, text_format(attributes, style));
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::{Attribute, TextRange};

    #[test]
    fn test_layout_job_sections_follow_runs() {
        let mut content = RichText::plain("Hello world", 14.0);
        content.set_attribute(Some(TextRange::new(0, 5)), Attribute::Underline, true);

        let style = RunStyle {
            color: Color32::BLACK,
            zoom_scale: 2.0,
            font_family: "System",
            wrap_width: 200.0,
        };
        let job = to_layout_job(&content, &style);

        assert_eq!(job.text, "Hello world");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[0].format.font_id.size, 28.0);
        assert_ne!(job.sections[0].format.underline, Stroke::NONE);
        assert_eq!(job.sections[1].format.underline, Stroke::NONE);
    }

    #[test]
    fn test_font_family_mapping() {
        assert_eq!(font_family("Monospaced"), FontFamily::Monospace);
        assert_eq!(font_family("Helvetica"), FontFamily::Proportional);
    }
}
