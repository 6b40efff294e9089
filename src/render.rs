//! Screen-space snapshots of the editor, built fresh for every frame.
//!
//! Nothing here paints; the panels turn these values into egui shapes.

use egui::{Pos2, Rect, Vec2};

use crate::geometry;
use crate::note::{NoteId, NoteStyle};
use crate::rich_text::RichText;
use crate::state::CanvasEditor;

/// Everything needed to draw one note
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRenderData {
    pub id: NoteId,
    /// Screen rectangle, relative to the canvas origin, with live gesture deltas
    pub rect: Rect,
    pub zoom_scale: f32,
    pub style: NoteStyle,
    /// Attributed text, laid out run by run
    pub content: RichText,
    pub selected: bool,
    pub editing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridLine {
    Vertical(f32),
    Horizontal(f32),
}

impl GridLine {
    /// End points of the line across a viewport of `size`
    pub fn endpoints(&self, size: Vec2) -> [Pos2; 2] {
        match *self {
            GridLine::Vertical(x) => [Pos2::new(x, 0.0), Pos2::new(x, size.y)],
            GridLine::Horizontal(y) => [Pos2::new(0.0, y), Pos2::new(size.x, y)],
        }
    }
}

/// Values shown on the toolbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarDisplay {
    pub zoom_percent: u32,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub has_selection: bool,
}

/// Notes in paint order, bottom first. Live gestures, including a pan,
/// show up in the rectangles.
pub fn notes(editor: &CanvasEditor) -> Vec<NoteRenderData> {
    let offset = editor.effective_offset();
    let zoom = editor.view().zoom();
    let gesture = editor.gesture();
    let selection = editor.selection();

    editor
        .notes()
        .iter()
        .map(|note| {
            let id = note.id();
            let rect = geometry::note_screen_rect(
                note,
                offset,
                gesture.drag_delta_for(id),
                gesture.resize_delta_for(id),
                zoom,
            );
            NoteRenderData {
                id,
                rect,
                zoom_scale: zoom,
                style: note.style().clone(),
                content: note.content.clone(),
                selected: selection.is_selected(id),
                editing: selection.editing_id() == Some(id),
            }
        })
        .collect()
}

/// Grid lines across a viewport of `size`; empty when the grid is hidden.
///
/// A pan in progress moves the grid along with the notes.
pub fn grid_lines(editor: &CanvasEditor, size: Vec2) -> Vec<GridLine> {
    let view = editor.view();
    if !view.show_grid {
        return Vec::new();
    }
    let tiling = view.grid_tiling(editor.effective_offset());
    tiling
        .vertical_lines(size.x)
        .map(GridLine::Vertical)
        .chain(tiling.horizontal_lines(size.y).map(GridLine::Horizontal))
        .collect()
}

pub fn toolbar_display(editor: &CanvasEditor) -> ToolbarDisplay {
    let zoom_percent = editor.view().zoom_percent();
    match editor.active_formatting() {
        Some(active) => ToolbarDisplay {
            zoom_percent,
            font_size: active.font_size,
            bold: active.bold,
            italic: active.italic,
            underline: active.underline,
            strikethrough: active.strikethrough,
            has_selection: true,
        },
        None => ToolbarDisplay {
            zoom_percent,
            font_size: editor.toolbar().style().font_size,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            has_selection: false,
        },
    }
}
