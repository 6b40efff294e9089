mod editor;
mod editor_state;

pub use editor::CanvasEditor;
pub use editor_state::GestureState;
