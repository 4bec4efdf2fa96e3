#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod panels;
pub mod picture;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PixelEditorApp;
pub use color::Color;
pub use config::{Args, EditorConfig};
pub use error::{Error, Result};
pub use picture::{Picture, PixelWrite, Point};
pub use renderer::PictureRenderer;
pub use state::{Action, EditorState, Reducer};
pub use tools::{PointerDown, ShapeKind, ToolStroke, ToolType};
