use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::file_handler::FileHandler;
use crate::panels::{central_panel, tools_panel};
use crate::picture::Point;
use crate::renderer::PictureRenderer;
use crate::state::{Action, EditorState, Reducer, update_state};
use crate::tools::{ToolStroke, ToolType};
use crate::util::time;

/// File name the Save button exports to
const EXPORT_FILE_NAME: &str = "pixelart.png";

/// The part of the editor that survives a restart
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
struct Settings {
    tool: ToolType,
    color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            tool: config.tool,
            color: config.color,
        }
    }
}

pub struct PixelEditorApp {
    pub(crate) state: EditorState,
    reducer: Reducer,
    pub(crate) scale: f32,
    pub(crate) renderer: PictureRenderer,
    /// Gesture in progress, from pointer press until release
    stroke: Option<ToolStroke>,
    last_cell: Option<Point>,
    file_handler: FileHandler,
}

impl PixelEditorApp {
    /// Called once before the first frame.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: EditorState,
        config: &EditorConfig,
    ) -> Self {
        let mut app = Self::with_state(state, config);
        let stored = cc
            .storage
            .and_then(|s| eframe::get_value::<Settings>(s, eframe::APP_KEY));
        if let Some(settings) = stored {
            log::debug!("restoring tool {} and color {}", settings.tool, settings.color);
            app.state = update_state(
                app.state,
                Action {
                    tool: Some(settings.tool),
                    color: Some(settings.color),
                    ..Default::default()
                },
            );
        }
        app
    }

    pub fn with_state(state: EditorState, config: &EditorConfig) -> Self {
        Self {
            state,
            reducer: config.reducer(),
            scale: config.scale,
            renderer: PictureRenderer::new(),
            stroke: None,
            last_cell: None,
            file_handler: FileHandler::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Run `action` through the configured reducer
    pub fn dispatch(&mut self, action: Action) {
        if let Some(tool) = action.tool {
            log::info!("tool selected: {}", tool);
        }
        // hand the history over by move so it is not cloned per dispatch
        let current = EditorState {
            history: std::mem::take(&mut self.state.history),
            ..self.state.clone()
        };
        self.state = self.reducer.apply(current, action, time::now_millis());
    }

    fn dispatch_result(&mut self, action: Result<Action>) {
        match action {
            Ok(action) => self.dispatch(action),
            Err(err) => log::error!("{} failed: {}", self.state.tool, err),
        }
    }

    /// Grid cell under `pos`, clamped to the picture
    fn cell_at(&self, rect: egui::Rect, pos: egui::Pos2) -> Point {
        let picture = &self.state.picture;
        let offset = (pos - rect.min) / self.scale;
        Point::new(
            (offset.x.floor() as i32).clamp(0, picture.width() as i32 - 1),
            (offset.y.floor() as i32).clamp(0, picture.height() as i32 - 1),
        )
    }

    /// Feed the primary pointer button to the active tool
    pub(crate) fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let (pressed, down, pointer) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.interact_pos(),
            )
        });

        if let Some(pos) = pointer {
            let cell = self.cell_at(response.rect, pos);
            if pressed && response.hovered() {
                self.pointer_down(cell);
            } else if down && self.last_cell != Some(cell) {
                self.pointer_move(cell);
            }
        }

        if !down {
            self.stroke = None;
            self.last_cell = None;
        }
    }

    fn pointer_down(&mut self, cell: Point) {
        self.last_cell = Some(cell);
        match self.state.tool.on_pointer_down(cell, &self.state) {
            Ok(down) => {
                self.stroke = down.stroke;
                self.dispatch(down.action);
            }
            Err(err) => log::error!("{} failed: {}", self.state.tool, err),
        }
    }

    fn pointer_move(&mut self, cell: Point) {
        let Some(mut stroke) = self.stroke.take() else {
            return;
        };
        self.last_cell = Some(cell);
        let action = stroke.on_pointer_move(cell, &self.state);
        self.stroke = Some(stroke);
        self.dispatch_result(action);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.dispatch(Action::undo());
        }
        let pressed = ctx.input(|i| {
            ToolType::ALL
                .into_iter()
                .find(|tool| i.modifiers.is_none() && i.key_pressed(tool.shortcut()))
        });
        if let Some(tool) = pressed {
            self.dispatch(Action::tool(tool));
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if self.file_handler.check_for_dropped_files(ctx) {
            if let Some(picture) = self.file_handler.take_dropped_picture() {
                self.stroke = None;
                self.dispatch(Action::picture(picture));
            }
        }
    }

    /// Write the current picture to `pixelart.png` in the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn save_picture(&self) {
        let path = std::path::Path::new(EXPORT_FILE_NAME);
        if let Err(err) = crate::file_handler::save_png(&self.state.picture, path) {
            log::error!("failed to save {}: {}", path.display(), err);
        }
    }

    /// Download the current picture as `pixelart.png`
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn save_picture(&self) {
        if let Err(err) = crate::file_handler::download_png(&self.state.picture, EXPORT_FILE_NAME) {
            log::error!("failed to download {}: {}", EXPORT_FILE_NAME, err);
        }
    }
}

impl eframe::App for PixelEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = Settings {
            tool: self.state.tool,
            color: self.state.color,
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
