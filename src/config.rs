use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::picture::Picture;
use crate::state::{CHECKPOINT_INTERVAL_MS, EditorState, Reducer};
use crate::tools::ToolType;

/// Startup configuration of the editor.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub color: Color,
    pub tool: ToolType,
    /// On-screen size of one picture cell, in points
    pub scale: f32,
    /// Coalescing window for undo checkpoints
    pub undo_window_ms: u64,
    /// Disable to dispatch through the plain reducer with no undo
    pub history: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 30,
            background: Color::rgb(0xf0, 0xf0, 0xf0),
            color: Color::BLACK,
            tool: ToolType::Draw,
            scale: 10.0,
            undo_window_ms: CHECKPOINT_INTERVAL_MS,
            history: true,
        }
    }
}

impl EditorConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the config from command line arguments: the config file if one
    /// was given, then any explicit overrides
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(width) = args.width {
            config.width = width;
        }
        if let Some(height) = args.height {
            config.height = height;
        }
        Ok(config)
    }

    pub fn reducer(&self) -> Reducer {
        if self.history {
            Reducer::History {
                window_ms: self.undo_window_ms,
            }
        } else {
            Reducer::Plain
        }
    }

    /// Fresh editor state with a blank picture
    pub fn initial_state(&self) -> Result<EditorState> {
        let picture = Picture::empty(self.width, self.height, self.background)?;
        Ok(EditorState::new(picture, self.tool, self.color))
    }
}

/// A pixel-art editor
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Args {
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Picture width in cells
    #[arg(long)]
    pub width: Option<usize>,

    /// Picture height in cells
    #[arg(long)]
    pub height: Option<usize>,

    /// Image to open instead of a blank picture
    #[arg(long)]
    pub open: Option<PathBuf>,
}
