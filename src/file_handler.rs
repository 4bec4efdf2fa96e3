use std::io::Cursor;
use std::path::Path;

use eframe::egui;
use image::{DynamicImage, ImageFormat, RgbImage};

use crate::color::Color;
#[cfg(target_arch = "wasm32")]
use crate::error::Error;
use crate::error::Result;
use crate::picture::Picture;

/// Largest picture an imported image is cropped to, per axis
pub const MAX_IMPORT_SIZE: u32 = 100;

/// Convert a decoded image into a picture, keeping at most the top-left
/// [`MAX_IMPORT_SIZE`] cells per axis. Alpha is dropped.
pub fn picture_from_image(image: &DynamicImage) -> Result<Picture> {
    let width = image.width().min(MAX_IMPORT_SIZE);
    let height = image.height().min(MAX_IMPORT_SIZE);
    let cropped = image.crop_imm(0, 0, width, height).to_rgb8();
    let pixels = cropped
        .pixels()
        .map(|p| Color::rgb(p[0], p[1], p[2]))
        .collect();
    Picture::from_pixels(width as usize, height as usize, pixels)
}

/// Decode an image from memory
pub fn picture_from_bytes(bytes: &[u8]) -> Result<Picture> {
    let image = image::load_from_memory(bytes)?;
    log::debug!("decoded image: {}x{}", image.width(), image.height());
    picture_from_image(&image)
}

/// Decode an image file in any format the `image` crate understands
pub fn load_picture(path: &Path) -> Result<Picture> {
    let image = image::open(path)?;
    log::info!("opened {} ({}x{})", path.display(), image.width(), image.height());
    picture_from_image(&image)
}

/// One image pixel per picture cell
pub fn picture_to_image(picture: &Picture) -> RgbImage {
    let (width, height) = (picture.width() as u32, picture.height() as u32);
    let raw = picture.pixels().iter().flat_map(|c| c.to_array()).collect();
    // `raw` always holds width * height * 3 bytes
    RgbImage::from_raw(width, height, raw).unwrap_or_else(|| RgbImage::new(width, height))
}

/// Encode the picture as PNG bytes at 1:1 scale
pub fn encode_png(picture: &Picture) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    picture_to_image(picture).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Save the picture as a PNG at 1:1 scale
pub fn save_png(picture: &Picture, path: &Path) -> Result<()> {
    picture_to_image(picture).save_with_format(path, ImageFormat::Png)?;
    log::info!("saved {}", path.display());
    Ok(())
}

/// Offer the picture to the browser as a PNG download named `file_name`
#[cfg(target_arch = "wasm32")]
pub fn download_png(picture: &Picture, file_name: &str) -> Result<()> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn js_error(err: JsValue) -> Error {
        Error::Web(format!("{err:?}"))
    }

    let bytes = encode_png(picture)?;
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Web("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| Error::Web("<a> is not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    log::info!("downloaded {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

/// Turns files dropped onto the window into pictures
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any were dropped this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the dropped files, returning the first one that is a readable image.
    /// Files that fail to decode are logged and skipped.
    pub fn take_dropped_picture(&mut self) -> Option<Picture> {
        std::mem::take(&mut self.dropped_files)
            .iter()
            .find_map(|file| match Self::decode(file) {
                Ok(picture) => Some(picture),
                Err(err) => {
                    log::warn!("ignoring dropped file {}: {}", Self::file_name(file), err);
                    None
                }
            })
    }

    fn file_name(file: &egui::DroppedFile) -> String {
        if let Some(path) = &file.path {
            path.display().to_string()
        } else if !file.name.is_empty() {
            file.name.clone()
        } else {
            "unknown".to_owned()
        }
    }

    fn decode(file: &egui::DroppedFile) -> Result<Picture> {
        if let Some(bytes) = &file.bytes {
            let name = Self::file_name(file);
            log::info!("processing image from memory: {} ({} bytes)", name, bytes.len());
            return picture_from_bytes(bytes);
        }
        match &file.path {
            Some(path) => load_picture(path),
            None => {
                let kind = std::io::ErrorKind::NotFound;
                Err(std::io::Error::new(kind, "dropped file has no data").into())
            }
        }
    }
}
