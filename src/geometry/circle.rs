use super::bounding_box;
use crate::color::Color;
use crate::picture::{Picture, PixelWrite, Point};

fn magnitude(dx: i32, dy: i32) -> f64 {
    let (dx, dy) = (f64::from(dx), f64::from(dy));
    (dx * dx + dy * dy).sqrt()
}

/// Disk-like region anchored at the minimum corner of the dragged box.
///
/// With `(x0, y0)` the box minimum and `(dx, dy)` its extent, the cells in
/// `[x0 - dx, x0 + dx] × [y0 - dy, y0 + dy]` whose distance `d` to `(x0, y0)`
/// satisfies `2d < 1.5 * |(dx, dy)|` are written. Cells outside `picture` are
/// skipped.
pub fn circle(picture: &Picture, start: Point, end: Point, color: Color) -> Vec<PixelWrite> {
    let (min, max) = bounding_box(start, end);
    let (dx, dy) = (max.x - min.x, max.y - min.y);
    let radius = magnitude(dx, dy);

    let mut writes = Vec::new();
    for y in (min.y - dy)..=max.y {
        for x in (min.x - dx)..=max.x {
            if !picture.contains(x, y) {
                continue;
            }
            if magnitude(min.x - x, min.y - y) * 2.0 < radius * 1.5 {
                writes.push(PixelWrite::new(x, y, color));
            }
        }
    }
    writes
}
