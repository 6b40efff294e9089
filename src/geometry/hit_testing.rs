use egui::{Pos2, Rect, Vec2};

use crate::collection::NoteCollection;
use crate::geometry::transform::note_screen_rect;
use crate::note::NoteId;

/// Part of a note that a pointer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteRegion {
    /// Top strip, drags the note
    Header,
    /// Bottom-right square, resizes the note
    ResizeHandle,
    /// Text area
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteHit {
    pub id: NoteId,
    pub region: NoteRegion,
}

/// Sizes of the interactive regions, in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegions {
    pub header_height: f32,
    pub resize_handle_size: f32,
}

impl HitRegions {
    /// Header strip of a note drawn at `rect`
    pub fn header_rect(&self, rect: Rect, zoom_scale: f32) -> Rect {
        let height = (self.header_height * zoom_scale).min(rect.height());
        Rect::from_min_size(rect.min, Vec2::new(rect.width(), height))
    }

    /// Resize square of a note drawn at `rect`
    pub fn resize_handle_rect(&self, rect: Rect, zoom_scale: f32) -> Rect {
        let side = self.resize_handle_size * zoom_scale;
        Rect::from_min_max(rect.max - Vec2::splat(side), rect.max)
    }

    /// Classify a point against a note drawn at `rect`.
    ///
    /// The resize handle wins over the header when they overlap.
    pub fn region_at(&self, rect: Rect, pos: Pos2, zoom_scale: f32) -> Option<NoteRegion> {
        if !rect.contains(pos) {
            return None;
        }
        let region = if self.resize_handle_rect(rect, zoom_scale).contains(pos) {
            NoteRegion::ResizeHandle
        } else if self.header_rect(rect, zoom_scale).contains(pos) {
            NoteRegion::Header
        } else {
            NoteRegion::Body
        };
        Some(region)
    }
}

/// Top-most note under a screen point. Later notes are on top.
pub fn hit_test_notes(
    notes: &NoteCollection,
    canvas_offset: Vec2,
    zoom_scale: f32,
    regions: &HitRegions,
    pos: Pos2,
) -> Option<NoteHit> {
    notes.iter().rev().find_map(|note| {
        let rect = note_screen_rect(note, canvas_offset, Vec2::ZERO, Vec2::ZERO, zoom_scale);
        regions
            .region_at(rect, pos, zoom_scale)
            .map(|region| NoteHit { id: note.id(), region })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;

    const REGIONS: HitRegions = HitRegions {
        header_height: 28.0,
        resize_handle_size: 20.0,
    };

    #[test]
    fn test_region_classification() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(200.0, 150.0));
        assert_eq!(REGIONS.region_at(rect, Pos2::new(50.0, 10.0), 1.0), Some(NoteRegion::Header));
        assert_eq!(REGIONS.region_at(rect, Pos2::new(195.0, 145.0), 1.0), Some(NoteRegion::ResizeHandle));
        assert_eq!(REGIONS.region_at(rect, Pos2::new(50.0, 80.0), 1.0), Some(NoteRegion::Body));
        assert_eq!(REGIONS.region_at(rect, Pos2::new(250.0, 80.0), 1.0), None);
    }

    #[test]
    fn test_regions_scale_with_zoom() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(400.0, 300.0));
        assert_eq!(REGIONS.region_at(rect, Pos2::new(50.0, 50.0), 2.0), Some(NoteRegion::Header));
        assert_eq!(REGIONS.region_at(rect, Pos2::new(50.0, 50.0), 1.0), Some(NoteRegion::Body));
    }

    #[test]
    fn test_topmost_note_wins() {
        let config = CanvasConfig::default();
        let style = config.default_style();
        let mut notes = NoteCollection::new(&config);
        notes.add(Pos2::new(0.0, 0.0), &style);
        let top = notes.add(Pos2::new(50.0, 50.0), &style).id();

        let hit = hit_test_notes(&notes, Vec2::ZERO, 1.0, &REGIONS, Pos2::new(100.0, 100.0));
        assert_eq!(hit.map(|hit| hit.id), Some(top));
        assert!(hit_test_notes(&notes, Vec2::ZERO, 1.0, &REGIONS, Pos2::new(900.0, 900.0)).is_none());
    }
}
