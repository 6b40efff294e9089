use crate::StickyCanvasApp;
use crate::command::ToolbarCommand;
use crate::note::{
    MAX_BORDER_WIDTH, MAX_CORNER_RADIUS, MAX_OPACITY, MAX_STYLE_FONT_SIZE, MIN_OPACITY,
    MIN_STYLE_FONT_SIZE,
};

const FONT_FAMILIES: [&str; 3] = ["System", "Serif", "Monospace"];

/// Whole-note style editor. Edits land in the toolbar state; "Apply" pushes
/// them onto the selected note.
pub fn customization_panel(app: &mut StickyCanvasApp, ctx: &egui::Context) {
    let original = app.editor().toolbar().snapshot();
    let mut style = original.clone();
    let has_selection = app.editor().selection().selected_id().is_some();
    let mut commands = Vec::new();

    egui::SidePanel::right("customization_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Note style");
            ui.separator();

            egui::Grid::new("customization_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Font size");
                    ui.add(egui::Slider::new(
                        &mut style.font_size,
                        MIN_STYLE_FONT_SIZE..=MAX_STYLE_FONT_SIZE,
                    ));
                    ui.end_row();

                    ui.label("Font");
                    egui::ComboBox::from_id_salt("font_family")
                        .selected_text(style.font_family.as_str())
                        .show_ui(ui, |ui| {
                            for family in FONT_FAMILIES {
                                ui.selectable_value(&mut style.font_family, family.to_owned(), family);
                            }
                        });
                    ui.end_row();

                    ui.label("Text");
                    ui.color_edit_button_srgba(&mut style.text_color);
                    ui.end_row();

                    ui.label("Background");
                    ui.color_edit_button_srgba(&mut style.background_color);
                    ui.end_row();

                    ui.label("Border");
                    ui.color_edit_button_srgba(&mut style.border_color);
                    ui.end_row();

                    ui.label("Corner radius");
                    ui.add(egui::Slider::new(&mut style.corner_radius, 0.0..=MAX_CORNER_RADIUS));
                    ui.end_row();

                    ui.label("Border width");
                    ui.add(egui::Slider::new(&mut style.border_width, 0.0..=MAX_BORDER_WIDTH));
                    ui.end_row();

                    ui.label("Opacity");
                    ui.add(egui::Slider::new(&mut style.opacity, MIN_OPACITY..=MAX_OPACITY));
                    ui.end_row();
                });

            ui.separator();
            if ui
                .add_enabled(has_selection, egui::Button::new("Apply to note"))
                .clicked()
            {
                commands.push(ToolbarCommand::ApplyFormatting);
            }
        });

    // Emit field-level commands first so "Apply" sees this frame's edits.
    let mut edits = Vec::new();
    if style.font_size != original.font_size {
        edits.push(ToolbarCommand::SetFontSize(style.font_size));
    }
    if style.font_family != original.font_family {
        edits.push(ToolbarCommand::SetFontFamily(style.font_family.clone()));
    }
    if style.text_color != original.text_color {
        edits.push(ToolbarCommand::SetTextColor(style.text_color));
    }
    if style.background_color != original.background_color {
        edits.push(ToolbarCommand::SetBackgroundColor(style.background_color));
    }
    if style.border_color != original.border_color {
        edits.push(ToolbarCommand::SetBorderColor(style.border_color));
    }
    if style.corner_radius != original.corner_radius {
        edits.push(ToolbarCommand::SetCornerRadius(style.corner_radius));
    }
    if style.border_width != original.border_width {
        edits.push(ToolbarCommand::SetBorderWidth(style.border_width));
    }
    if style.opacity != original.opacity {
        edits.push(ToolbarCommand::SetOpacity(style.opacity));
    }
    edits.extend(commands);
    app.execute_all(edits);
}
