pub mod hit_testing;
pub mod transform;

pub use hit_testing::{hit_test_notes, HitRegions, NoteHit, NoteRegion};
pub use transform::{
    commit_drag, commit_resize, note_screen_position, note_screen_rect, note_screen_size,
    screen_to_canvas, GridTiling,
};
