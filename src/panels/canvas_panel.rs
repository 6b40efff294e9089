use std::sync::Arc;

use egui::text::LayoutJob;
use egui::{Color32, CursorIcon, Galley, Painter, Rect, Sense, Stroke, Ui, UiBuilder, Vec2};

use crate::StickyCanvasApp;
use crate::geometry::{HitRegions, NoteRegion};
use crate::render::{self, NoteRenderData};
use crate::rich_text::layout::{self, RunStyle};
use crate::rich_text::TextRange;
use crate::state::CanvasEditor;
use crate::widgets::ResizeHandle;

const GRID_COLOR: Color32 = Color32::from_gray(60);
const SELECTION_COLOR: Color32 = Color32::from_rgb(33, 150, 243);
const TEXT_PADDING: f32 = 6.0;

pub fn canvas_panel(app: &mut StickyCanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::from_gray(32)))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let origin = response.rect.min;

            let (editor, input) = app.editor_and_input();
            for event in input.process_response(&response, origin) {
                log::trace!("Canvas input {:?}", event);
                editor.handle_input(event);
            }

            if let Some(pointer) = response.hover_pos() {
                let local = (pointer - origin).to_pos2();
                match editor.hit_test(local).map(|hit| hit.region) {
                    Some(NoteRegion::ResizeHandle) => ctx.set_cursor_icon(ResizeHandle::cursor_icon()),
                    Some(NoteRegion::Header) => ctx.set_cursor_icon(CursorIcon::Grab),
                    _ => {}
                }
            }

            let painter = painter.with_clip_rect(response.rect);
            for line in render::grid_lines(editor, response.rect.size()) {
                let [a, b] = line.endpoints(response.rect.size());
                painter.line_segment([a + origin.to_vec2(), b + origin.to_vec2()], Stroke::new(1.0, GRID_COLOR));
            }

            let regions = editor.hit_regions();
            for mut note in render::notes(editor) {
                note.rect = note.rect.translate(origin.to_vec2());
                paint_note(&painter, &note, &regions);
                if note.editing {
                    edit_note_text(ui, editor, &note, &regions);
                } else {
                    let galley = note_galley(ui, &note, body_rect(&note, &regions));
                    painter.galley(body_rect(&note, &regions).min, galley, note.style.text_color);
                }
            }
        });
}

fn body_rect(note: &NoteRenderData, regions: &HitRegions) -> Rect {
    let header = regions.header_rect(note.rect, note.zoom_scale);
    Rect::from_min_max(
        egui::pos2(note.rect.min.x, header.max.y),
        note.rect.max,
    )
    .shrink(TEXT_PADDING * note.zoom_scale)
}

fn run_style<'a>(note: &'a NoteRenderData, wrap_width: f32) -> RunStyle<'a> {
    RunStyle {
        color: note.style.text_color.gamma_multiply(note.style.opacity),
        zoom_scale: note.zoom_scale,
        font_family: &note.style.font_family,
        wrap_width,
    }
}

fn note_galley(ui: &Ui, note: &NoteRenderData, body: Rect) -> Arc<Galley> {
    let job = layout::to_layout_job(&note.content, &run_style(note, body.width().max(0.0)));
    ui.fonts(|fonts| fonts.layout_job(job))
}

fn paint_note(painter: &Painter, note: &NoteRenderData, regions: &HitRegions) {
    let style = &note.style;
    let rounding = style.corner_radius * note.zoom_scale;
    let fill = style.background_color.gamma_multiply(style.opacity);
    let border = if note.selected {
        Stroke::new((style.border_width + 1.0) * note.zoom_scale, SELECTION_COLOR)
    } else {
        Stroke::new(style.border_width * note.zoom_scale, style.border_color.gamma_multiply(style.opacity))
    };
    painter.rect(note.rect, rounding, fill, border);

    let header = regions.header_rect(note.rect, note.zoom_scale);
    painter.rect_filled(
        header,
        egui::Rounding {
            nw: rounding,
            ne: rounding,
            sw: 0.0,
            se: 0.0,
        },
        Color32::from_black_alpha(24),
    );

    ResizeHandle::new(
        regions.resize_handle_rect(note.rect, note.zoom_scale),
        style.border_color.gamma_multiply(style.opacity),
    )
    .paint(painter);
}

/// Inline editor for the note in edit mode. Text changes and the selected
/// character range flow back into the editor every frame.
fn edit_note_text(ui: &mut Ui, editor: &mut CanvasEditor, note: &NoteRenderData, regions: &HitRegions) {
    let body = body_rect(note, regions);
    let mut text = note.content.text().to_owned();
    let style = run_style(note, body.width().max(0.0));

    let mut layouter = |ui: &Ui, current: &str, wrap_width: f32| {
        let mut job = if current == note.content.text() {
            layout::to_layout_job(&note.content, &style)
        } else {
            // Mid-keystroke the content lags one frame behind the buffer.
            let attributes = note.content.base_attributes();
            let mut job = LayoutJob::default();
            job.append(current, 0.0, layout::text_format(attributes, &style));
            job
        };
        job.wrap.max_width = wrap_width;
        ui.fonts(|fonts| fonts.layout_job(job))
    };

    ui.allocate_new_ui(UiBuilder::new().max_rect(body), |ui| {
        let output = egui::TextEdit::multiline(&mut text)
            .id_salt(("note_text", note.id))
            .frame(false)
            .desired_width(body.width())
            .desired_rows(1)
            .min_size(Vec2::new(body.width(), body.height()))
            .layouter(&mut layouter)
            .show(ui);

        if output.response.changed() {
            editor.edit_text(note.id, &text);
        }
        if let Some(cursor) = output.cursor_range {
            editor.set_selected_range(note.id, TextRange::from(cursor.as_sorted_char_range()));
        }
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            editor.end_editing();
        }
    });
}
