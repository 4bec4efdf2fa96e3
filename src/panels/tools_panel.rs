use eframe::egui;

use crate::app::PixelEditorApp;
use crate::components::ToolButton;
use crate::state::Action;
use crate::tools::ToolType;

pub fn tools_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.state().tool;
            ui.horizontal_wrapped(|ui| {
                for tool in ToolType::ALL {
                    let response = ToolButton::new(tool, tool == active)
                        .show(ui)
                        .on_hover_text(format!("{} ({})", tool, tool.shortcut().name()));
                    if response.clicked() && tool != active {
                        app.dispatch(Action::tool(tool));
                    }
                }
            });
            ui.label(format!("Tool: {}", active));
            ui.separator();

            // Color picker
            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut rgb = app.state().color.to_array();
                if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                    app.dispatch(Action::color(rgb.into()));
                }
                ui.monospace(app.state().color.to_string());
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.state().can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    app.dispatch(Action::undo());
                }
                if ui.button("Save").clicked() {
                    app.save_picture();
                }
            });
            ui.label(format!("Undo steps: {}", app.state().history.len()));

            ui.separator();
            let picture = &app.state().picture;
            ui.label(format!("{}×{}", picture.width(), picture.height()));
            ui.small("Drop an image onto the window to open it.");
        });
}
