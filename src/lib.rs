#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod collection;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod note;
pub mod panels;
pub mod render;
pub mod rich_text;
pub mod selection;
pub mod state;
pub mod toolbar;
pub mod widgets;

pub use app::StickyCanvasApp;
pub use canvas::CanvasView;
pub use collection::{NoteCollection, PaletteEntry};
pub use command::ToolbarCommand;
pub use config::CanvasConfig;
pub use error::{ConfigError, EditorError};
pub use input::{CanvasInput, InputHandler};
pub use note::{Note, NoteId, NoteStyle};
pub use rich_text::{Attribute, RichText, TextAttributes, TextRange};
pub use selection::{ActiveFormatting, SelectionController, SelectionState};
pub use state::{CanvasEditor, GestureState};
pub use toolbar::ToolbarState;
