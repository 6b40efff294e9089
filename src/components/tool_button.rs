use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2};

/// Square toolbar button showing a glyph, highlighted while its state is on
pub struct ToolButton {
    pub glyph: &'static str,
    pub tooltip: &'static str,
    pub selected: bool,
    pub enabled: bool,
}

impl ToolButton {
    pub fn new(glyph: &'static str, tooltip: &'static str, selected: bool) -> Self {
        Self {
            glyph,
            tooltip,
            selected,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(28.0), sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246)
            } else if response.hovered() && self.enabled {
                Color32::from_gray(70)
            } else {
                Color32::from_gray(45)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = match (self.selected, self.enabled) {
                (true, _) => Color32::BLACK,
                (false, true) => Color32::WHITE,
                (false, false) => Color32::from_gray(110),
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(16.0),
                text_color,
            );

            if self.selected {
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(2.0, Color32::from_rgb(33, 150, 243)));
            }
        }

        response.on_hover_text(self.tooltip)
    }
}
