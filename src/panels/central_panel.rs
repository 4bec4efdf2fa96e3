use eframe::egui;

use crate::app::PixelEditorApp;
use crate::renderer::PictureRenderer;

pub fn central_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        app.renderer.sync(ctx, &app.state.picture);
        let size = PictureRenderer::canvas_size(&app.state.picture, app.scale);

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            app.renderer.paint(&painter, response.rect);
            app.handle_pointer(ctx, &response);
        });
    });
}
