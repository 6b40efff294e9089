use egui::{Pos2, Vec2};

/// Pointer gestures after recognition, in canvas-local screen coordinates
/// (the top-left of the canvas area is the origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasInput {
    /// Double click or double tap
    DoubleClick { pos: Pos2 },
    /// Single click or tap
    Click { pos: Pos2 },
    /// A drag began at `pos`
    DragStarted { pos: Pos2 },
    /// Cumulative translation since the drag began
    DragChanged { translation: Vec2 },
    DragEnded,
    DragCancelled,
}

/// Converts egui responses into [`CanvasInput`]s.
///
/// egui reports per-frame drag deltas; this keeps the running total so the
/// editor always receives the cumulative translation.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    translation: Vec2,
    dragging: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for one frame of `response`, which must cover the canvas whose
    /// top-left corner is `origin`.
    pub fn process_response(&mut self, response: &egui::Response, origin: Pos2) -> Vec<CanvasInput> {
        let mut events = Vec::new();
        let local = |pos: Pos2| (pos - origin).to_pos2();

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.translation = Vec2::ZERO;
                self.dragging = true;
                events.push(CanvasInput::DragStarted { pos: local(pos) });
            }
        }

        if self.dragging && response.dragged() {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                self.translation += delta;
                events.push(CanvasInput::DragChanged {
                    translation: self.translation,
                });
            }
        }

        if self.dragging && response.drag_stopped() {
            self.dragging = false;
            self.translation = Vec2::ZERO;
            events.push(CanvasInput::DragEnded);
        }

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(CanvasInput::DoubleClick { pos: local(pos) });
            }
        } else if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(CanvasInput::Click { pos: local(pos) });
            }
        }

        events
    }

    /// Abandon a drag the canvas lost track of (e.g. focus change)
    pub fn cancel(&mut self) -> Option<CanvasInput> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.translation = Vec2::ZERO;
        Some(CanvasInput::DragCancelled)
    }
}
