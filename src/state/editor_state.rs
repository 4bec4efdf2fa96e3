use std::collections::VecDeque;

use crate::color::Color;
use crate::picture::Picture;
use crate::tools::ToolType;

use super::Action;

/// Everything the editor shows: the picture being edited, the active tool
/// and color, and the undo checkpoints.
///
/// Values of this type are replaced wholesale by the reducers in
/// [`super::reducer`]; nothing edits one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub tool: ToolType,
    pub color: Color,
    pub picture: Picture,
    /// Pictures as they were before each checkpointed edit, newest first
    pub history: VecDeque<Picture>,
    /// Milliseconds timestamp of the newest checkpoint, 0 when none is open
    pub last_checkpoint: u64,
}

impl EditorState {
    pub fn new(picture: Picture, tool: ToolType, color: Color) -> Self {
        Self {
            tool,
            color,
            picture,
            history: VecDeque::new(),
            last_checkpoint: 0,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Copy every field `action` carries into this state
    pub(crate) fn merge(mut self, action: Action) -> Self {
        if let Some(tool) = action.tool {
            self.tool = tool;
        }
        if let Some(color) = action.color {
            self.color = color;
        }
        if let Some(picture) = action.picture {
            self.picture = picture;
        }
        self
    }
}
