use crate::color::Color;
use crate::picture::Picture;
use crate::tools::ToolType;

/// A sparse update to merge into the [`EditorState`](super::EditorState).
///
/// Any subset of `tool`, `color` and `picture` may be set. `undo` asks the
/// history reducer to step back one checkpoint instead of merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub tool: Option<ToolType>,
    pub color: Option<Color>,
    pub picture: Option<Picture>,
    pub undo: bool,
}

impl Action {
    pub fn tool(tool: ToolType) -> Self {
        Self {
            tool: Some(tool),
            ..Default::default()
        }
    }

    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn picture(picture: Picture) -> Self {
        Self {
            picture: Some(picture),
            ..Default::default()
        }
    }

    pub fn undo() -> Self {
        Self {
            undo: true,
            ..Default::default()
        }
    }
}
