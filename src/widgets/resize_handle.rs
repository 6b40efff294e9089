use egui::{Color32, CursorIcon, Painter, Rect, Stroke, Vec2};

/// The bottom-right grip of a note.
///
/// Purely visual: the canvas owns pointer handling and routes drags that
/// start inside [`ResizeHandle::rect`] to the resize gesture.
pub struct ResizeHandle {
    rect: Rect,
    color: Color32,
}

impl ResizeHandle {
    pub fn new(rect: Rect, color: Color32) -> Self {
        Self { rect, color }
    }

    pub fn cursor_icon() -> CursorIcon {
        CursorIcon::ResizeNwSe
    }

    /// Three diagonal strokes hugging the corner
    pub fn paint(&self, painter: &Painter) {
        let corner = self.rect.max;
        let side = self.rect.width().min(self.rect.height());
        if side <= 0.0 {
            return;
        }
        let stroke = Stroke::new((side / 12.0).clamp(0.5, 2.0), self.color);
        for fraction in [0.25, 0.5, 0.75] {
            let reach = side * fraction;
            painter.line_segment(
                [
                    corner - Vec2::new(reach, 2.0),
                    corner - Vec2::new(2.0, reach),
                ],
                stroke,
            );
        }
    }
}

