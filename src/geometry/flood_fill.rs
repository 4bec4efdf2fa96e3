use std::collections::VecDeque;

use crate::color::Color;
use crate::error::Result;
use crate::picture::{Picture, PixelWrite, Point};

const AROUND: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Recolor the 4-connected region of cells sharing the seed's color.
///
/// Cells are compared against the seed's original color, never against the
/// fill color, so filling a region with its own color still terminates. The
/// writes come out in breadth-first order starting at the seed.
pub fn flood_fill(picture: &Picture, seed: Point, color: Color) -> Result<Vec<PixelWrite>> {
    let target = picture.pixel(seed.x, seed.y)?;
    let width = picture.width();
    let mut visited = vec![false; width * picture.height()];
    let mut queue = VecDeque::new();
    let mut writes = Vec::new();

    visited[seed.x as usize + seed.y as usize * width] = true;
    queue.push_back(seed);

    while let Some(p) = queue.pop_front() {
        writes.push(PixelWrite::new(p.x, p.y, color));
        for (dx, dy) in AROUND {
            let (x, y) = (p.x + dx, p.y + dy);
            if !matches!(picture.pixel(x, y), Ok(c) if c == target) {
                continue;
            }
            let i = x as usize + y as usize * width;
            if !visited[i] {
                visited[i] = true;
                queue.push_back(Point::new(x, y));
            }
        }
    }
    Ok(writes)
}
