use crate::StickyCanvasApp;
use crate::command::ToolbarCommand;
use crate::components::ToolButton;
use crate::render::toolbar_display;
use crate::rich_text::Attribute;

fn glyph(attribute: Attribute) -> (&'static str, &'static str) {
    match attribute {
        Attribute::Bold => ("B", "Bold"),
        Attribute::Italic => ("I", "Italic"),
        Attribute::Underline => ("U", "Underline"),
        Attribute::Strikethrough => ("S", "Strikethrough"),
    }
}

pub fn toolbar_panel(app: &mut StickyCanvasApp, ctx: &egui::Context) {
    let display = toolbar_display(app.editor());
    let show_grid = app.editor().view().show_grid;
    let show_customization = app.editor().view().show_customization;
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for attribute in Attribute::ALL {
                let (text, tooltip) = glyph(attribute);
                let active = match attribute {
                    Attribute::Bold => display.bold,
                    Attribute::Italic => display.italic,
                    Attribute::Underline => display.underline,
                    Attribute::Strikethrough => display.strikethrough,
                };
                let button = ToolButton::new(text, tooltip, active).enabled(display.has_selection);
                if button.show(ui).clicked() {
                    commands.push(ToolbarCommand::Toggle(attribute));
                }
            }

            ui.separator();

            let grow = ToolButton::new("A+", "Larger text", false).enabled(display.has_selection);
            if grow.show(ui).clicked() {
                commands.push(ToolbarCommand::IncreaseFontSize);
            }
            ui.label(format!("{:.0}", display.font_size));
            let shrink = ToolButton::new("A-", "Smaller text", false).enabled(display.has_selection);
            if shrink.show(ui).clicked() {
                commands.push(ToolbarCommand::DecreaseFontSize);
            }

            ui.separator();

            if ui.button("−").clicked() {
                commands.push(ToolbarCommand::ZoomOut);
            }
            ui.label(format!("{}%", display.zoom_percent));
            if ui.button("+").clicked() {
                commands.push(ToolbarCommand::ZoomIn);
            }

            ui.separator();

            if ui.selectable_label(show_grid, "Grid").clicked() {
                commands.push(ToolbarCommand::ToggleGrid);
            }
            if ui.selectable_label(show_customization, "Customize").clicked() {
                commands.push(ToolbarCommand::ToggleCustomization);
            }
            if ui
                .add_enabled(display.has_selection, egui::Button::new("Delete"))
                .clicked()
            {
                commands.push(ToolbarCommand::DeleteSelected);
            }
        });
    });

    app.execute_all(commands);
}
