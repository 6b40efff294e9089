use egui::{Pos2, Vec2};
use sticky_canvas::geometry::{
    commit_drag, commit_resize, note_screen_position, note_screen_size, screen_to_canvas,
    GridTiling,
};
use sticky_canvas::{CanvasConfig, Note, NoteStyle};

fn note_at(position: Pos2, size: Vec2) -> Note {
    let style: NoteStyle = CanvasConfig::default().default_style();
    Note::new(position, size, "note", style)
}

fn approx(a: Pos2, b: Pos2) -> bool {
    (a.x - b.x).abs() < 0.001 && (a.y - b.y).abs() < 0.001
}

#[test]
fn test_creation_anchor_ignores_zoom() {
    let anchor = screen_to_canvas(Pos2::new(300.0, 200.0), Vec2::new(50.0, 50.0));
    assert_eq!(anchor, Pos2::new(250.0, 150.0));
}

#[test]
fn test_screen_position_at_various_zooms() {
    let note = note_at(Pos2::new(10.0, 20.0), Vec2::new(200.0, 150.0));
    let offset = Vec2::new(5.0, -5.0);

    let at_one = note_screen_position(&note, offset, Vec2::ZERO, 1.0);
    assert!(approx(at_one, Pos2::new(115.0, 90.0)));

    let at_half = note_screen_position(&note, offset, Vec2::ZERO, 0.5);
    assert!(approx(at_half, Pos2::new(57.5, 45.0)));

    // A live drag moves the rendered centre by exactly the pointer travel.
    let dragged = note_screen_position(&note, offset, Vec2::new(20.0, 10.0), 0.5);
    assert!(approx(dragged, at_half + Vec2::new(20.0, 10.0)));
}

#[test]
fn test_drag_round_trip_returns_note() {
    for zoom in [0.1, 0.5, 1.0, 1.7, 2.0] {
        let start = Pos2::new(42.0, -17.0);
        let delta = Vec2::new(33.0, 71.0);
        let moved = commit_drag(start, delta, zoom);
        let back = commit_drag(moved, -delta, zoom);
        assert!(approx(back, start), "zoom {zoom}: {back:?}");
    }
}

#[test]
fn test_resize_respects_minimum() {
    let size = commit_resize(Vec2::new(200.0, 150.0), Vec2::new(-500.0, -500.0));
    assert_eq!(size, Vec2::new(100.0, 80.0));

    let note = note_at(Pos2::ZERO, Vec2::new(200.0, 150.0));
    let live = note_screen_size(&note, Vec2::new(20.0, 0.0), 2.0);
    assert_eq!(live, Vec2::new(440.0, 300.0));
}

#[test]
fn test_grid_phase_follows_pan() {
    let tiling = GridTiling::new(20.0, Vec2::new(-5.0, 45.0), 1.0);
    assert!((tiling.spacing - 20.0).abs() < 0.001);
    assert!((tiling.phase.x - 15.0).abs() < 0.001);
    assert!((tiling.phase.y - 5.0).abs() < 0.001);

    let zoomed = GridTiling::new(20.0, Vec2::ZERO, 0.5);
    let xs: Vec<f32> = zoomed.vertical_lines(35.0).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0]);
}
