use egui::{Color32, Pos2, Vec2};

use crate::config::CanvasConfig;
use crate::error::EditorError;
use crate::note::{Note, NoteId, NoteStyle};

/// A background/border colour pair assigned to new notes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteEntry {
    pub background: Color32,
    pub border: Color32,
}

/// Notes in creation order. Later notes are drawn on top.
#[derive(Debug, Clone)]
pub struct NoteCollection {
    notes: Vec<Note>,
    palette: Vec<PaletteEntry>,
    creation_count: usize,
    default_size: Vec2,
    default_text: String,
}

impl Default for NoteCollection {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl NoteCollection {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            notes: Vec::new(),
            palette: config.palette(),
            creation_count: 0,
            default_size: config.default_note_size(),
            default_text: config.default_note_text.clone(),
        }
    }

    /// Create a note at `position` from a toolbar style snapshot.
    ///
    /// The background and border colours come from the palette, cycled in
    /// creation order; the rest of the style is taken from `style`.
    pub fn add(&mut self, position: Pos2, style: &NoteStyle) -> &Note {
        let entry = self.next_palette_entry();
        let style = NoteStyle {
            background_color: entry.background,
            border_color: entry.border,
            ..style.clone()
        };
        let note = Note::new(position, self.default_size, &self.default_text, style);
        log::debug!("Created note {} at {:?}", note.id(), position);

        let index = self.notes.len();
        self.notes.push(note);
        &self.notes[index]
    }

    fn next_palette_entry(&mut self) -> PaletteEntry {
        let entry = if self.palette.is_empty() {
            PaletteEntry::default()
        } else {
            self.palette[self.creation_count % self.palette.len()]
        };
        self.creation_count += 1;
        entry
    }

    /// Remove a note. Missing ids are ignored.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id() == id)?;
        log::debug!("Removed note {}", id);
        Some(self.notes.remove(index))
    }

    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    pub fn find_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == id)
    }

    /// Mutable lookup for paths that only ever hold live ids
    pub fn get_mut_or_err(&mut self, id: NoteId) -> Result<&mut Note, EditorError> {
        self.find_mut(id).ok_or(EditorError::NoteNotFound(id))
    }

    /// Apply `mutate` to the note in place. Returns false for a missing id.
    pub fn update(&mut self, id: NoteId, mutate: impl FnOnce(&mut Note)) -> bool {
        match self.find_mut(id) {
            Some(note) => {
                mutate(note);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.find(id).is_some()
    }

    /// Notes in creation order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_every_six() {
        let config = CanvasConfig::default();
        let style = config.default_style();
        let mut notes = NoteCollection::new(&config);
        let ids: Vec<NoteId> = (0..7)
            .map(|i| notes.add(Pos2::new(i as f32 * 10.0, 0.0), &style).id())
            .collect();

        let first = notes.find(ids[0]).unwrap().style().clone();
        let second = notes.find(ids[1]).unwrap().style().clone();
        let seventh = notes.find(ids[6]).unwrap().style().clone();
        assert_eq!(first.background_color, seventh.background_color);
        assert_eq!(first.border_color, seventh.border_color);
        assert_ne!(first.background_color, second.background_color);
    }

    #[test]
    fn test_palette_does_not_rewind_after_delete() {
        let config = CanvasConfig::default();
        let style = config.default_style();
        let mut notes = NoteCollection::new(&config);
        let first = notes.add(Pos2::ZERO, &style).id();
        notes.remove(first);
        let second = notes.add(Pos2::ZERO, &style).style().background_color;
        assert_eq!(second, config.palette()[1].background);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut notes = NoteCollection::default();
        let stranger = NoteId::new();
        assert!(notes.remove(stranger).is_none());
        assert!(!notes.update(stranger, |note| note.position = Pos2::ZERO));
        assert_eq!(
            notes.get_mut_or_err(stranger).unwrap_err(),
            EditorError::NoteNotFound(stranger)
        );
    }

    #[test]
    fn test_update_mutates_in_place() {
        let mut notes = NoteCollection::default();
        let style = CanvasConfig::default().default_style();
        let id = notes.add(Pos2::ZERO, &style).id();
        assert!(notes.update(id, |note| note.position = Pos2::new(5.0, 6.0)));
        assert_eq!(notes.find(id).unwrap().position, Pos2::new(5.0, 6.0));
        assert_eq!(notes.find(id).unwrap().id(), id);
    }
}
