//! Which note is selected, which characters inside it are targeted, and the
//! toolbar state derived from both.
//!
//! ```text
//!   create / click note          click another note
//!  ┌──────────────┐ ───────► ┌───────────────┐ ◄──┐
//!  │ NoSelection  │          │ NoteSelected  │ ───┘
//!  └──────────────┘ ◄─────── └───────────────┘
//!                  delete selected note
//! ```
//!
//! Clicking empty canvas does not deselect.

use std::collections::HashMap;

use crate::collection::NoteCollection;
use crate::note::NoteId;
use crate::rich_text::{Attribute, TextRange};
use crate::toolbar::ToolbarState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    NoteSelected {
        id: NoteId,
    },
}

/// Toolbar indicators for the current selection, always derived fresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveFormatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_size: f32,
}

impl ActiveFormatting {
    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Strikethrough => self.strikethrough,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    /// Last text selection reported for each note
    ranges: HashMap<NoteId, TextRange>,
    editing: Option<NoteId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        match self.state {
            SelectionState::NoteSelected { id } => Some(id),
            SelectionState::NoSelection => None,
        }
    }

    pub fn is_selected(&self, id: NoteId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Select `id` and pull its style into the toolbar.
    ///
    /// Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: NoteId, notes: &NoteCollection, toolbar: &mut ToolbarState) {
        let Some(note) = notes.find(id) else {
            log::warn!("Ignoring selection of missing note {}", id);
            return;
        };
        if self.editing.is_some_and(|editing| editing != id) {
            self.editing = None;
        }
        self.state = SelectionState::NoteSelected { id };
        toolbar.load_from_note(note);
        log::debug!("Selected note {}", id);
    }

    /// Forget everything about a deleted note
    pub fn note_removed(&mut self, id: NoteId) {
        self.ranges.remove(&id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.is_selected(id) {
            self.state = SelectionState::NoSelection;
        }
    }

    pub fn set_range(&mut self, id: NoteId, range: TextRange) {
        self.ranges.insert(id, range);
    }

    pub fn range_for(&self, id: NoteId) -> Option<TextRange> {
        self.ranges.get(&id).copied()
    }

    pub fn editing_id(&self) -> Option<NoteId> {
        self.editing
    }

    /// Enter text editing for the selected note
    pub fn begin_editing(&mut self, id: NoteId) {
        if self.is_selected(id) {
            self.editing = Some(id);
        }
    }

    pub fn end_editing(&mut self) {
        self.editing = None;
    }

    /// Indicators for the selected note and its stored range.
    ///
    /// Recomputed from the content on every call, so edits made through any
    /// path are reflected.
    pub fn active_formatting(&self, notes: &NoteCollection) -> Option<ActiveFormatting> {
        let id = self.selected_id()?;
        let content = &notes.find(id)?.content;
        let range = self.range_for(id);
        Some(ActiveFormatting {
            bold: content.query_attribute(range, Attribute::Bold),
            italic: content.query_attribute(range, Attribute::Italic),
            underline: content.query_attribute(range, Attribute::Underline),
            strikethrough: content.query_attribute(range, Attribute::Strikethrough),
            font_size: content.query_font_size(range),
        })
    }

    /// Toggle `attribute` over the selected range. Returns the applied value.
    pub fn toggle(&self, attribute: Attribute, notes: &mut NoteCollection) -> Option<bool> {
        let id = self.selected_id()?;
        let range = self.range_for(id);
        let note = match notes.get_mut_or_err(id) {
            Ok(note) => note,
            Err(err) => {
                log::error!("Cannot toggle {}: {}", attribute.as_str(), err);
                return None;
            }
        };
        let value = note.content.toggle_attribute(range, attribute);
        note.set_default_flag(attribute, value);
        note.refresh_base_attributes();
        Some(value)
    }

    /// Grow the font of the selected range. Returns the applied size.
    pub fn grow_font(&self, notes: &mut NoteCollection) -> Option<f32> {
        let id = self.selected_id()?;
        let range = self.range_for(id);
        match notes.get_mut_or_err(id) {
            Ok(note) => Some(note.content.grow_font_size(range)),
            Err(err) => {
                log::error!("Cannot grow font: {}", err);
                None
            }
        }
    }

    /// Shrink the font of the selected range. Returns the applied size.
    pub fn shrink_font(&self, notes: &mut NoteCollection) -> Option<f32> {
        let id = self.selected_id()?;
        let range = self.range_for(id);
        match notes.get_mut_or_err(id) {
            Ok(note) => Some(note.content.shrink_font_size(range)),
            Err(err) => {
                log::error!("Cannot shrink font: {}", err);
                None
            }
        }
    }

    /// Push the toolbar's whole-note style onto the selected note
    pub fn apply_formatting(&self, notes: &mut NoteCollection, toolbar: &ToolbarState) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let applied = notes.update(id, |note| {
            note.set_style(toolbar.snapshot());
            note.refresh_base_attributes();
        });
        if !applied {
            log::error!("Cannot apply formatting: note {} is gone", id);
        }
        applied
    }
}
