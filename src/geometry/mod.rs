//! Rasterization primitives.
//!
//! Each primitive turns a gesture (one or two grid points) and a color into
//! the list of [`PixelWrite`](crate::picture::PixelWrite)s to hand to
//! [`Picture::draw`](crate::picture::Picture::draw). None of them emit writes
//! outside the picture for in-bounds input.

mod circle;
mod flood_fill;
mod line;
mod rectangle;

pub use circle::circle;
pub use flood_fill::flood_fill;
pub use line::line;
pub use rectangle::rectangle;

use crate::picture::Point;

/// Inclusive bounding box of two corners as `(min, max)`
pub(crate) fn bounding_box(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
