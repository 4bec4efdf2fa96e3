use super::bounding_box;
use crate::color::Color;
use crate::picture::{PixelWrite, Point};

/// Fill the inclusive box spanned by two corners, row by row
pub fn rectangle(start: Point, end: Point, color: Color) -> Vec<PixelWrite> {
    let (min, max) = bounding_box(start, end);
    (min.y..=max.y)
        .flat_map(|y| (min.x..=max.x).map(move |x| PixelWrite::new(x, y, color)))
        .collect()
}
