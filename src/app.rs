use crate::command::ToolbarCommand;
use crate::config::CanvasConfig;
use crate::input::InputHandler;
use crate::panels::{canvas_panel, customization_panel, toolbar_panel};
use crate::state::CanvasEditor;

pub struct StickyCanvasApp {
    editor: CanvasEditor,
    input: InputHandler,
}

impl Default for StickyCanvasApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl StickyCanvasApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            editor: CanvasEditor::new(config),
            input: InputHandler::new(),
        }
    }

    pub fn editor(&self) -> &CanvasEditor {
        &self.editor
    }

    /// Split borrow for the canvas, which feeds one into the other
    pub fn editor_and_input(&mut self) -> (&mut CanvasEditor, &mut InputHandler) {
        (&mut self.editor, &mut self.input)
    }

    pub fn execute_all(&mut self, commands: Vec<ToolbarCommand>) {
        for command in commands {
            log::debug!("Executing {:?}", command);
            self.editor.execute(command);
        }
    }
}

impl eframe::App for StickyCanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels first so the canvas gets the remaining space.
        toolbar_panel(self, ctx);
        if self.editor.view().show_customization {
            customization_panel(self, ctx);
        }
        canvas_panel(self, ctx);

        if !ctx.input(|i| i.focused) {
            if let Some(cancel) = self.input.cancel() {
                self.editor.handle_input(cancel);
            }
        }
    }
}
