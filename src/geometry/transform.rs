//! Pure mappings between the three coordinate spaces of the canvas.
//!
//! - *Screen space*: pixels of the visible canvas area.
//! - *Canvas space*: the unscaled, infinite plane notes are stored in.
//! - *Zoomed note space*: canvas space shifted by the pan offset and scaled
//!   by the zoom factor, which is what ends up on screen.
//!
//! Nothing here rounds or snaps: notes are placed freely even when the grid
//! is visible.

use egui::{Pos2, Rect, Vec2};

use crate::note::{MIN_NOTE_SIZE, Note};

/// Smallest zoom used as a divisor, whatever the caller passes in
const ZOOM_EPSILON: f32 = 1e-3;

/// Upper bound on grid lines per axis
pub const MAX_GRID_LINES: usize = 4096;

fn safe_zoom(zoom_scale: f32) -> f32 {
    if zoom_scale.is_nan() { 1.0 } else { zoom_scale.max(ZOOM_EPSILON) }
}

/// Canvas anchor for a point clicked on screen.
///
/// The zoom factor is deliberately not applied here: new notes are placed by
/// subtracting the pan offset only.
pub fn screen_to_canvas(screen_point: Pos2, canvas_offset: Vec2) -> Pos2 {
    screen_point - canvas_offset
}

/// Rendered centre of a note while an optional drag is in flight.
///
/// `((position + offset + drag / zoom) + size / 2) * zoom`
pub fn note_screen_position(
    note: &Note,
    canvas_offset: Vec2,
    drag_delta: Vec2,
    zoom_scale: f32,
) -> Pos2 {
    let zoom = safe_zoom(zoom_scale);
    let center = note.position + canvas_offset + drag_delta / zoom + note.size() / 2.0;
    (center.to_vec2() * zoom).to_pos2()
}

/// Rendered size of a note while an optional resize is in flight
pub fn note_screen_size(note: &Note, resize_delta: Vec2, zoom_scale: f32) -> Vec2 {
    (note.size() + resize_delta) * safe_zoom(zoom_scale)
}

/// On-screen rectangle of a note, including live gesture deltas
pub fn note_screen_rect(
    note: &Note,
    canvas_offset: Vec2,
    drag_delta: Vec2,
    resize_delta: Vec2,
    zoom_scale: f32,
) -> Rect {
    Rect::from_center_size(
        note_screen_position(note, canvas_offset, drag_delta, zoom_scale),
        note_screen_size(note, resize_delta, zoom_scale),
    )
}

/// Bake a finished drag into a stored position
pub fn commit_drag(position: Pos2, drag_delta: Vec2, zoom_scale: f32) -> Pos2 {
    position + drag_delta / safe_zoom(zoom_scale)
}

/// Bake a finished resize into a stored size, respecting the minimum
pub fn commit_resize(size: Vec2, resize_delta: Vec2) -> Vec2 {
    (size + resize_delta).max(MIN_NOTE_SIZE)
}

/// Spacing and phase of the background grid.
///
/// Spacing follows the zoom; the phase follows the pan offset modulo the
/// spacing, so lines stay anchored to the pan position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTiling {
    pub spacing: f32,
    pub phase: Vec2,
}

impl GridTiling {
    pub fn new(base_grid_size: f32, canvas_offset: Vec2, zoom_scale: f32) -> Self {
        let spacing = base_grid_size * safe_zoom(zoom_scale);
        Self {
            spacing,
            phase: Vec2::new(
                canvas_offset.x.rem_euclid(spacing),
                canvas_offset.y.rem_euclid(spacing),
            ),
        }
    }

    /// X positions of vertical lines across `[0, width]`
    pub fn vertical_lines(&self, width: f32) -> impl Iterator<Item = f32> {
        Self::lines(self.phase.x, self.spacing, width)
    }

    /// Y positions of horizontal lines across `[0, height]`
    pub fn horizontal_lines(&self, height: f32) -> impl Iterator<Item = f32> {
        Self::lines(self.phase.y, self.spacing, height)
    }

    fn lines(phase: f32, spacing: f32, extent: f32) -> impl Iterator<Item = f32> {
        let count = if spacing > 0.0 && extent >= phase {
            (((extent - phase) / spacing).floor() as usize + 1).min(MAX_GRID_LINES)
        } else {
            0
        };
        (0..count).map(move |i| phase + i as f32 * spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;

    fn note_at(position: Pos2) -> Note {
        Note::new(
            position,
            Vec2::new(200.0, 100.0),
            "",
            CanvasConfig::default().default_style(),
        )
    }

    #[test]
    fn test_screen_to_canvas_subtracts_offset() {
        let anchor = screen_to_canvas(Pos2::new(300.0, 200.0), Vec2::new(50.0, 50.0));
        assert_eq!(anchor, Pos2::new(250.0, 150.0));
    }

    #[test]
    fn test_note_center_scales_with_zoom() {
        let note = note_at(Pos2::new(10.0, 20.0));
        let center = note_screen_position(&note, Vec2::new(5.0, 5.0), Vec2::ZERO, 2.0);
        // ((10 + 5) + 100) * 2, ((20 + 5) + 50) * 2
        assert_eq!(center, Pos2::new(230.0, 150.0));
    }

    #[test]
    fn test_drag_stays_under_cursor() {
        let note = note_at(Pos2::new(0.0, 0.0));
        let delta = Vec2::new(40.0, -20.0);
        for zoom in [0.1, 0.5, 1.0, 2.0] {
            let before = note_screen_position(&note, Vec2::ZERO, Vec2::ZERO, zoom);
            let during = note_screen_position(&note, Vec2::ZERO, delta, zoom);
            assert!(((during - before) - delta).length() < 0.001);
        }
    }

    #[test]
    fn test_commit_resize_clamps() {
        let size = commit_resize(Vec2::new(120.0, 90.0), Vec2::new(-50.0, -50.0));
        assert_eq!(size, MIN_NOTE_SIZE);
    }

    #[test]
    fn test_zero_zoom_never_divides_by_zero() {
        let position = commit_drag(Pos2::ZERO, Vec2::new(1.0, 1.0), 0.0);
        assert!(position.x.is_finite() && position.y.is_finite());
    }

    #[test]
    fn test_grid_phase_is_non_negative() {
        let tiling = GridTiling::new(20.0, Vec2::new(-35.0, 47.0), 1.0);
        assert_eq!(tiling.spacing, 20.0);
        assert!((tiling.phase.x - 5.0).abs() < 0.001);
        assert!((tiling.phase.y - 7.0).abs() < 0.001);

        let xs: Vec<f32> = tiling.vertical_lines(50.0).collect();
        assert_eq!(xs.len(), 3);
        assert!((xs[2] - 45.0).abs() < 0.001);
    }

    #[test]
    fn test_grid_line_count_is_bounded() {
        let tiling = GridTiling::new(20.0, Vec2::ZERO, 1e-9);
        assert_eq!(tiling.vertical_lines(1.0e6).count(), MAX_GRID_LINES);
        assert_eq!(tiling.horizontal_lines(1.0e6).count(), MAX_GRID_LINES);
    }

    #[test]
    fn test_grid_spacing_follows_zoom() {
        let tiling = GridTiling::new(20.0, Vec2::new(30.0, 0.0), 0.5);
        assert_eq!(tiling.spacing, 10.0);
        assert_eq!(tiling.phase.x, 0.0);
    }
}
