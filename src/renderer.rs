use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::picture::{Picture, Point};

/// Convert a region of the picture into an egui image
fn color_image(picture: &Picture, min: Point, max: Point) -> ColorImage {
    let (w, h) = ((max.x - min.x + 1) as usize, (max.y - min.y + 1) as usize);
    let mut image = ColorImage::new([w, h], Color32::TRANSPARENT);
    for y in 0..h {
        let row = (min.y as usize + y) * picture.width();
        for x in 0..w {
            image.pixels[x + y * w] = picture.pixels()[row + min.x as usize + x].into();
        }
    }
    image
}

/// Keeps a GPU texture in step with the editor's picture.
///
/// The texture holds one texel per cell and is sampled with nearest filtering,
/// so it can be stretched to any scale without blurring. Only the region that
/// changed since the last sync is uploaded.
pub struct PictureRenderer {
    texture: Option<TextureHandle>,
    rendered: Option<Picture>,
}

impl Default for PictureRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PictureRenderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            rendered: None,
        }
    }

    /// On-screen size of `picture` when every cell is `scale` points wide
    pub fn canvas_size(picture: &Picture, scale: f32) -> egui::Vec2 {
        egui::vec2(picture.width() as f32 * scale, picture.height() as f32 * scale)
    }

    /// Upload whatever differs between `picture` and the last synced picture
    pub fn sync(&mut self, ctx: &egui::Context, picture: &Picture) {
        if self.rendered.as_ref() == Some(picture) {
            return;
        }
        let size = [picture.width(), picture.height()];
        let same_size = self.texture.as_ref().is_some_and(|t| t.size() == size);
        let changed = match &self.rendered {
            Some(old) if same_size => picture.changed_bounds(old),
            _ => None,
        };
        let full = (
            Point::new(0, 0),
            Point::new(picture.width() as i32 - 1, picture.height() as i32 - 1),
        );

        if let Some(texture) = self.texture.as_mut() {
            match changed {
                Some((min, max)) => {
                    log::trace!("uploading cells {:?}..={:?}", min, max);
                    texture.set_partial(
                        [min.x as usize, min.y as usize],
                        color_image(picture, min, max),
                        TextureOptions::NEAREST,
                    );
                }
                None => texture.set(color_image(picture, full.0, full.1), TextureOptions::NEAREST),
            }
        } else {
            self.texture = Some(ctx.load_texture(
                "picture",
                color_image(picture, full.0, full.1),
                TextureOptions::NEAREST,
            ));
        }
        self.rendered = Some(picture.clone());
    }

    /// Paint the last synced picture stretched over `rect`
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::picture::PixelWrite;

    #[test]
    fn test_color_image_region() {
        let picture = Picture::empty(4, 3, Color::WHITE)
            .unwrap()
            .draw(&[PixelWrite::new(2, 1, Color::BLACK)])
            .unwrap();
        let image = color_image(&picture, Point::new(1, 1), Point::new(2, 2));
        assert_eq!(image.size, [2, 2]);
        assert_eq!(image.pixels[1], Color32::BLACK);
        assert_eq!(image.pixels[0], Color32::WHITE);
    }

    #[test]
    fn test_sync_creates_texture_and_tracks_picture() {
        let ctx = egui::Context::default();
        let mut renderer = PictureRenderer::new();
        let picture = Picture::empty(5, 5, Color::WHITE).unwrap();

        renderer.sync(&ctx, &picture);
        assert_eq!(renderer.texture.as_ref().map(|t| t.size()), Some([5, 5]));

        let edited = picture.draw(&[PixelWrite::new(4, 4, Color::BLACK)]).unwrap();
        renderer.sync(&ctx, &edited);
        assert_eq!(renderer.rendered.as_ref(), Some(&edited));

        let resized = Picture::empty(2, 3, Color::WHITE).unwrap();
        renderer.sync(&ctx, &resized);
        assert_eq!(renderer.texture.as_ref().map(|t| t.size()), Some([2, 3]));
    }

    #[test]
    fn test_canvas_size() {
        let picture = Picture::empty(60, 30, Color::WHITE).unwrap();
        assert_eq!(PictureRenderer::canvas_size(&picture, 10.0), egui::vec2(600.0, 300.0));
    }
}
