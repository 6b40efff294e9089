//! The gesture state machine of the canvas editor.
//!
//! Pointer gestures arrive as a start, any number of changes and an end (or
//! a cancel). While one is in flight its translation lives here as transient
//! view state; the notes and the pan offset only change when the gesture
//! ends.
//!
//! ```text
//!                    ┌───────────────┐
//!              ┌─────► DraggingNote  ├─────┐
//!              │     └───────────────┘     │
//! ┌──────────┐ │     ┌───────────────┐     │ ┌──────────┐
//! │   Idle   ├─┼─────► ResizingNote  ├─────┼─►   Idle   │
//! └──────────┘ │     └───────────────┘     │ └──────────┘
//!              │     ┌───────────────┐     │
//!              └─────►    Panning    ├─────┘
//!                    └───────────────┘
//! ```
use egui::Vec2;

use crate::note::NoteId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Moving a note by its header
    DraggingNote { id: NoteId, delta: Vec2 },
    /// Resizing a note by its bottom-right handle
    ResizingNote { id: NoteId, delta: Vec2 },
    /// Panning the empty canvas
    Panning { delta: Vec2 },
}

impl GestureState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &GestureState) -> bool {
        match (self, new_state) {
            // From Idle, we can start any gesture
            (GestureState::Idle, _) => true,
            // Any gesture can only end or cancel
            (_, GestureState::Idle) => true,
            // Updates keep the same kind and target
            (GestureState::DraggingNote { id: a, .. }, GestureState::DraggingNote { id: b, .. }) => a == b,
            (GestureState::ResizingNote { id: a, .. }, GestureState::ResizingNote { id: b, .. }) => a == b,
            (GestureState::Panning { .. }, GestureState::Panning { .. }) => true,
            _ => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Same gesture with its translation replaced
    pub fn with_translation(self, translation: Vec2) -> Self {
        match self {
            GestureState::Idle => GestureState::Idle,
            GestureState::DraggingNote { id, .. } => GestureState::DraggingNote { id, delta: translation },
            GestureState::ResizingNote { id, .. } => GestureState::ResizingNote { id, delta: translation },
            GestureState::Panning { .. } => GestureState::Panning { delta: translation },
        }
    }

    /// Live drag delta for `id`, zero unless that note is being dragged
    pub fn drag_delta_for(&self, id: NoteId) -> Vec2 {
        match self {
            GestureState::DraggingNote { id: dragged, delta } if *dragged == id => *delta,
            _ => Vec2::ZERO,
        }
    }

    /// Live resize delta for `id`, zero unless that note is being resized
    pub fn resize_delta_for(&self, id: NoteId) -> Vec2 {
        match self {
            GestureState::ResizingNote { id: resized, delta } if *resized == id => *delta,
            _ => Vec2::ZERO,
        }
    }

    pub fn pan_delta(&self) -> Vec2 {
        match self {
            GestureState::Panning { delta } => *delta,
            _ => Vec2::ZERO,
        }
    }

    /// Note the gesture is attached to, if any
    pub fn target(&self) -> Option<NoteId> {
        match self {
            GestureState::DraggingNote { id, .. } | GestureState::ResizingNote { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::DraggingNote { .. } => "DraggingNote",
            GestureState::ResizingNote { .. } => "ResizingNote",
            GestureState::Panning { .. } => "Panning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let id = NoteId::new();
        let dragging = GestureState::DraggingNote { id, delta: Vec2::ZERO };
        assert!(GestureState::Idle.can_transition_to(&dragging));
        assert!(dragging.can_transition_to(&dragging.with_translation(Vec2::X)));
        assert!(!dragging.can_transition_to(&GestureState::Panning { delta: Vec2::ZERO }));
        assert!(dragging.can_transition_to(&GestureState::Idle));
    }

    #[test]
    fn test_deltas_are_scoped_to_target() {
        let id = NoteId::new();
        let other = NoteId::new();
        let state = GestureState::ResizingNote { id, delta: Vec2::new(4.0, 2.0) };
        assert_eq!(state.resize_delta_for(id), Vec2::new(4.0, 2.0));
        assert_eq!(state.resize_delta_for(other), Vec2::ZERO);
        assert_eq!(state.drag_delta_for(id), Vec2::ZERO);
        assert_eq!(state.pan_delta(), Vec2::ZERO);
    }
}
