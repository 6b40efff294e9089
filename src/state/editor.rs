use egui::{Pos2, Vec2};

use super::GestureState;
use crate::canvas::CanvasView;
use crate::collection::NoteCollection;
use crate::command::ToolbarCommand;
use crate::config::CanvasConfig;
use crate::geometry::{self, HitRegions, NoteHit, NoteRegion};
use crate::input::CanvasInput;
use crate::note::NoteId;
use crate::rich_text::{Attribute, TextRange};
use crate::selection::{ActiveFormatting, SelectionController};
use crate::toolbar::ToolbarState;

/// Owns every piece of canvas state and routes input through it.
///
/// All mutations run to completion synchronously; missing ids are no-ops.
#[derive(Debug, Clone)]
pub struct CanvasEditor {
    config: CanvasConfig,
    notes: NoteCollection,
    view: CanvasView,
    selection: SelectionController,
    toolbar: ToolbarState,
    gesture: GestureState,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasEditor {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            notes: NoteCollection::new(&config),
            view: CanvasView::new(&config),
            selection: SelectionController::new(),
            toolbar: ToolbarState::new(&config),
            gesture: GestureState::Idle,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn view(&self) -> &CanvasView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CanvasView {
        &mut self.view
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn toolbar(&self) -> &ToolbarState {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut ToolbarState {
        &mut self.toolbar
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn hit_regions(&self) -> HitRegions {
        HitRegions {
            header_height: self.config.header_height,
            resize_handle_size: self.config.resize_handle_size,
        }
    }

    /// Pan offset including a pan gesture in flight
    pub fn effective_offset(&self) -> Vec2 {
        self.view.offset() + self.gesture.pan_delta()
    }

    /// Top-most note under a canvas-local screen point
    pub fn hit_test(&self, pos: Pos2) -> Option<NoteHit> {
        geometry::hit_test_notes(
            &self.notes,
            self.view.offset(),
            self.view.zoom(),
            &self.hit_regions(),
            pos,
        )
    }

    pub fn handle_input(&mut self, input: CanvasInput) {
        match input {
            CanvasInput::DoubleClick { pos } => {
                if self.hit_test(pos).is_none() {
                    self.create_note_at(pos);
                }
            }
            CanvasInput::Click { pos } => self.click(pos),
            CanvasInput::DragStarted { pos } => self.begin_gesture(pos),
            CanvasInput::DragChanged { translation } => self.update_gesture(translation),
            CanvasInput::DragEnded => self.end_gesture(),
            CanvasInput::DragCancelled => self.cancel_gesture(),
        }
    }

    pub fn execute(&mut self, command: ToolbarCommand) {
        command.execute(self);
    }

    /// Create a note anchored under a canvas-local screen point and select it
    pub fn create_note_at(&mut self, screen_pos: Pos2) -> NoteId {
        let anchor = geometry::screen_to_canvas(screen_pos, self.view.offset());
        let id = self.notes.add(anchor, &self.toolbar.snapshot()).id();
        log::info!("Created note {} at canvas {:?}", id, anchor);
        self.select_note(id);
        id
    }

    pub fn select_note(&mut self, id: NoteId) {
        self.selection.select(id, &self.notes, &mut self.toolbar);
    }

    /// Delete a note; deleting the selected note clears the selection
    pub fn delete_note(&mut self, id: NoteId) {
        if self.notes.remove(id).is_none() {
            log::debug!("Delete of missing note {} ignored", id);
            return;
        }
        if self.gesture.target() == Some(id) {
            self.gesture = GestureState::Idle;
        }
        self.selection.note_removed(id);
        log::info!("Deleted note {}", id);
    }

    fn click(&mut self, pos: Pos2) {
        let Some(hit) = self.hit_test(pos) else {
            return;
        };
        if self.selection.is_selected(hit.id) && hit.region == NoteRegion::Body {
            self.selection.begin_editing(hit.id);
        } else {
            self.select_note(hit.id);
        }
    }

    fn begin_gesture(&mut self, pos: Pos2) {
        if !self.gesture.is_idle() {
            log::warn!("Drag started during {}, discarding it", self.gesture.name());
            self.cancel_gesture();
        }
        let next = match self.hit_test(pos) {
            Some(NoteHit { id, region: NoteRegion::Header }) => {
                GestureState::DraggingNote { id, delta: Vec2::ZERO }
            }
            Some(NoteHit { id, region: NoteRegion::ResizeHandle }) => {
                GestureState::ResizingNote { id, delta: Vec2::ZERO }
            }
            Some(NoteHit { region: NoteRegion::Body, .. }) => return,
            None => GestureState::Panning { delta: Vec2::ZERO },
        };
        self.transition(next);
    }

    fn update_gesture(&mut self, translation: Vec2) {
        let next = self.gesture.with_translation(translation);
        self.transition(next);
    }

    /// Commit the gesture in progress into persistent state
    fn end_gesture(&mut self) {
        let zoom = self.view.zoom();
        match self.gesture {
            GestureState::Idle => {}
            GestureState::DraggingNote { id, delta } => {
                self.notes.update(id, |note| {
                    note.position = geometry::commit_drag(note.position, delta, zoom);
                });
            }
            GestureState::ResizingNote { id, delta } => {
                self.notes.update(id, |note| {
                    note.set_size(geometry::commit_resize(note.size(), delta));
                });
            }
            GestureState::Panning { delta } => self.view.pan_by(delta),
        }
        self.transition(GestureState::Idle);
    }

    fn cancel_gesture(&mut self) {
        self.transition(GestureState::Idle);
    }

    fn transition(&mut self, next: GestureState) {
        if self.gesture.can_transition_to(&next) {
            self.gesture = next;
        } else {
            log::warn!(
                "Ignoring gesture transition {} -> {}",
                self.gesture.name(),
                next.name()
            );
        }
    }

    /// Replace a note's text with what a text widget now holds
    pub fn edit_text(&mut self, id: NoteId, new_text: &str) {
        let changed = self.notes.update(id, |note| {
            note.content.sync_plain_text(new_text);
        });
        if !changed {
            log::debug!("Text edit for missing note {} ignored", id);
        }
    }

    /// Record the character range selected inside a note
    pub fn set_selected_range(&mut self, id: NoteId, range: TextRange) {
        if self.notes.contains(id) {
            self.selection.set_range(id, range);
        }
    }

    pub fn end_editing(&mut self) {
        self.selection.end_editing();
    }

    pub fn toggle_attribute(&mut self, attribute: Attribute) -> Option<bool> {
        self.selection.toggle(attribute, &mut self.notes)
    }

    pub fn grow_font(&mut self) -> Option<f32> {
        self.selection.grow_font(&mut self.notes)
    }

    pub fn shrink_font(&mut self) -> Option<f32> {
        self.selection.shrink_font(&mut self.notes)
    }

    pub fn apply_formatting(&mut self) -> bool {
        self.selection.apply_formatting(&mut self.notes, &self.toolbar)
    }

    /// Toolbar indicators, recomputed on every call
    pub fn active_formatting(&self) -> Option<ActiveFormatting> {
        self.selection.active_formatting(&self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleting_dragged_note_resets_gesture() {
        let mut editor = CanvasEditor::default();
        let id = editor.create_note_at(Pos2::new(0.0, 0.0));
        editor.handle_input(CanvasInput::DragStarted { pos: Pos2::new(10.0, 5.0) });
        assert_eq!(editor.gesture().target(), Some(id));

        editor.delete_note(id);
        assert!(editor.gesture().is_idle());
        editor.handle_input(CanvasInput::DragEnded);
        assert!(editor.notes().is_empty());
    }

    #[test]
    fn test_live_pan_shows_in_effective_offset() {
        let mut editor = CanvasEditor::default();
        editor.handle_input(CanvasInput::DragStarted { pos: Pos2::new(500.0, 500.0) });
        editor.handle_input(CanvasInput::DragChanged { translation: Vec2::new(-8.0, 4.0) });
        assert_eq!(editor.effective_offset(), Vec2::new(-8.0, 4.0));
        assert_eq!(editor.view().offset(), Vec2::ZERO);
    }
}
