use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry;
use crate::picture::Point;
use crate::state::{Action, EditorState};

mod stroke;
pub use stroke::{ShapeKind, ToolStroke};

/// Enum representing all available tools.
///
/// Pressing the pointer with a tool produces an [`Action`] and, for tools that
/// follow the pointer, a [`ToolStroke`] to feed every later pointer position
/// until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// Freehand drawing
    #[default]
    Draw,
    Line,
    /// Flood fill
    Fill,
    Rectangle,
    /// Color picker
    Pick,
    Circle,
}

/// What a pointer press produced
#[derive(Debug, Clone)]
pub struct PointerDown {
    /// Action to dispatch for the press itself
    pub action: Action,
    /// Continuation for subsequent pointer moves, if the tool follows the pointer
    pub stroke: Option<ToolStroke>,
}

impl ToolType {
    pub const ALL: [ToolType; 6] = [
        Self::Draw,
        Self::Line,
        Self::Fill,
        Self::Rectangle,
        Self::Pick,
        Self::Circle,
    ];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Line => "line",
            Self::Fill => "fill",
            Self::Rectangle => "rectangle",
            Self::Pick => "pick",
            Self::Circle => "circle",
        }
    }

    /// Single-key shortcut that selects this tool
    pub fn shortcut(&self) -> egui::Key {
        match self {
            Self::Draw => egui::Key::D,
            Self::Line => egui::Key::L,
            Self::Fill => egui::Key::F,
            Self::Rectangle => egui::Key::R,
            Self::Pick => egui::Key::P,
            Self::Circle => egui::Key::C,
        }
    }

    /// Handle pointer press on the canvas at grid cell `pos`.
    ///
    /// `pos` must lie inside `state.picture`.
    pub fn on_pointer_down(&self, pos: Point, state: &EditorState) -> Result<PointerDown> {
        let picture = &state.picture;
        let color = state.color;
        match self {
            Self::Fill => {
                let writes = geometry::flood_fill(picture, pos, color)?;
                Ok(PointerDown {
                    action: Action::picture(picture.draw(&writes)?),
                    stroke: None,
                })
            }
            Self::Pick => Ok(PointerDown {
                action: Action::color(picture.pixel(pos.x, pos.y)?),
                stroke: None,
            }),
            Self::Draw => {
                let mut stroke = ToolStroke::Freehand { last: pos };
                let action = stroke.on_pointer_move(pos, state)?;
                Ok(PointerDown {
                    action,
                    stroke: Some(stroke),
                })
            }
            Self::Line => Self::start_shape(ShapeKind::Line, pos, state),
            Self::Rectangle => Self::start_shape(ShapeKind::Rectangle, pos, state),
            Self::Circle => Self::start_shape(ShapeKind::Circle, pos, state),
        }
    }

    fn start_shape(kind: ShapeKind, pos: Point, state: &EditorState) -> Result<PointerDown> {
        let mut stroke = ToolStroke::Shape {
            kind,
            origin: pos,
            base: state.picture.clone(),
            color: state.color,
        };
        let action = stroke.on_pointer_move(pos, state)?;
        Ok(PointerDown {
            action,
            stroke: Some(stroke),
        })
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| Error::UnknownTool(s.to_owned()))
    }
}
