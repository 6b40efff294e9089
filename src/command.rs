use egui::Color32;

use crate::rich_text::Attribute;
use crate::state::CanvasEditor;

/// Actions issued by the toolbar and customization panel
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarCommand {
    /// Toggle a face trait over the selected range
    Toggle(Attribute),
    IncreaseFontSize,
    DecreaseFontSize,
    /// Push the toolbar's whole-note style onto the selected note
    ApplyFormatting,
    SetFontSize(f32),
    SetTextColor(Color32),
    SetBackgroundColor(Color32),
    SetBorderColor(Color32),
    SetCornerRadius(f32),
    SetBorderWidth(f32),
    SetOpacity(f32),
    SetFontFamily(String),
    ZoomIn,
    ZoomOut,
    ToggleGrid,
    ToggleCustomization,
    DeleteSelected,
}

impl ToolbarCommand {
    /// Execute the command against the editor. Commands that need a
    /// selection do nothing without one.
    pub fn execute(&self, editor: &mut CanvasEditor) {
        match self {
            ToolbarCommand::Toggle(attribute) => {
                if let Some(value) = editor.toggle_attribute(*attribute) {
                    log::debug!("{} is now {}", attribute.as_str(), value);
                }
            }
            ToolbarCommand::IncreaseFontSize => {
                editor.grow_font();
            }
            ToolbarCommand::DecreaseFontSize => {
                editor.shrink_font();
            }
            ToolbarCommand::ApplyFormatting => {
                editor.apply_formatting();
            }
            ToolbarCommand::SetFontSize(size) => editor.toolbar_mut().set_font_size(*size),
            ToolbarCommand::SetTextColor(color) => editor.toolbar_mut().set_text_color(*color),
            ToolbarCommand::SetBackgroundColor(color) => {
                editor.toolbar_mut().set_background_color(*color)
            }
            ToolbarCommand::SetBorderColor(color) => editor.toolbar_mut().set_border_color(*color),
            ToolbarCommand::SetCornerRadius(radius) => {
                editor.toolbar_mut().set_corner_radius(*radius)
            }
            ToolbarCommand::SetBorderWidth(width) => editor.toolbar_mut().set_border_width(*width),
            ToolbarCommand::SetOpacity(opacity) => editor.toolbar_mut().set_opacity(*opacity),
            ToolbarCommand::SetFontFamily(family) => {
                editor.toolbar_mut().set_font_family(family.clone())
            }
            ToolbarCommand::ZoomIn => editor.view_mut().zoom_in(),
            ToolbarCommand::ZoomOut => editor.view_mut().zoom_out(),
            ToolbarCommand::ToggleGrid => editor.view_mut().toggle_grid(),
            ToolbarCommand::ToggleCustomization => editor.view_mut().toggle_customization(),
            ToolbarCommand::DeleteSelected => {
                if let Some(id) = editor.selection().selected_id() {
                    editor.delete_note(id);
                }
            }
        }
    }
}
