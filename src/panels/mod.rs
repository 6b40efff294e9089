mod canvas_panel;
mod customization_panel;
mod toolbar_panel;

pub use canvas_panel::canvas_panel;
pub use customization_panel::customization_panel;
pub use toolbar_panel::toolbar_panel;
