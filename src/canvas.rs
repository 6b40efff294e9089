use egui::Vec2;

use crate::config::CanvasConfig;
use crate::geometry::GridTiling;

/// How far from a step multiple, in steps, still counts as on it
const SNAP_TOLERANCE: f32 = 1e-3;

/// Pan/zoom state of the canvas plus its purely visual toggles
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasView {
    offset: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    zoom_step: f32,
    base_grid_size: f32,
    pub show_grid: bool,
    pub show_customization: bool,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl CanvasView {
    pub fn new(config: &CanvasConfig) -> Self {
        let min_zoom = config.min_zoom.max(f32::EPSILON);
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0_f32.clamp(min_zoom, config.max_zoom.max(min_zoom)),
            min_zoom,
            max_zoom: config.max_zoom.max(min_zoom),
            zoom_step: config.zoom_step,
            base_grid_size: config.base_grid_size,
            show_grid: true,
            show_customization: false,
        }
    }

    /// Pan translation in screen pixels
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Zoom as a whole percentage, for display
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Set the zoom, clamped into the configured limits. The value need not
    /// be a multiple of the zoom step.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn zoom_in(&mut self) {
        self.step_zoom(1.0);
    }

    pub fn zoom_out(&mut self) {
        self.step_zoom(-1.0);
    }

    /// Steps land on exact multiples of the step so repeated clicks do not
    /// accumulate float drift. A zoom between multiples moves to the nearest
    /// one in the step direction.
    fn step_zoom(&mut self, direction: f32) {
        let position = self.zoom / self.zoom_step;
        let steps = if direction > 0.0 {
            (position + SNAP_TOLERANCE).floor() + 1.0
        } else {
            (position - SNAP_TOLERANCE).ceil() - 1.0
        };
        self.set_zoom(steps * self.zoom_step);
        log::debug!("Zoom is now {}%", self.zoom_percent());
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn toggle_customization(&mut self) {
        self.show_customization = !self.show_customization;
    }

    /// Grid tiling for a pan offset, usually [`Self::offset`] plus any live pan
    pub fn grid_tiling(&self, canvas_offset: Vec2) -> GridTiling {
        GridTiling::new(self.base_grid_size, canvas_offset, self.zoom)
    }
}
