use crate::color::Color;
use crate::picture::{PixelWrite, Point};

/// Every integer from `from` to `to` inclusive, stepping toward `to`
fn span(from: i32, to: i32) -> Vec<i32> {
    if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    }
}

/// Splits the long axis of a line into one run per step of the short axis.
///
/// With `d = ceil(long / steps)`, the first `steps - spare` runs take `d`
/// values and the remaining `spare` runs take `d - 1`, where
/// `spare = d * steps - long`. The runs therefore cover the long axis exactly
/// once. The last run takes whatever is left if the slice runs short.
struct Runs<'a> {
    rest: &'a [i32],
    determinant: usize,
    split: usize,
    step: usize,
    steps: usize,
}

impl<'a> Runs<'a> {
    fn new(long: &'a [i32], steps: usize) -> Self {
        let determinant = long.len().div_ceil(steps);
        let spare = determinant * steps - long.len();
        Self {
            rest: long,
            determinant,
            split: steps - spare,
            step: 0,
            steps,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a [i32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.step == self.steps {
            return None;
        }
        let wanted = if self.step < self.split {
            self.determinant
        } else {
            self.determinant - 1
        };
        let (run, rest) = self.rest.split_at(wanted.min(self.rest.len()));
        self.rest = rest;
        self.step += 1;
        Some(run)
    }
}

/// Rasterize the segment from `start` to `end`, both endpoints included.
///
/// Works purely on integers: the longer axis is cut into runs, one per cell of
/// the shorter axis, so a 7×3 segment becomes runs of 3, 2 and 2 cells.
pub fn line(start: Point, end: Point, color: Color) -> Vec<PixelWrite> {
    let xs = span(start.x, end.x);
    let ys = span(start.y, end.y);

    if xs.len() == ys.len() {
        return xs
            .iter()
            .zip(&ys)
            .map(|(&x, &y)| PixelWrite::new(x, y, color))
            .collect();
    }

    let long_is_x = xs.len() > ys.len();
    let (long, short) = if long_is_x { (&xs, &ys) } else { (&ys, &xs) };

    let mut writes = Vec::with_capacity(long.len());
    for (run, &fixed) in Runs::new(long, short.len()).zip(short) {
        writes.extend(run.iter().map(|&v| {
            if long_is_x {
                PixelWrite::new(v, fixed, color)
            } else {
                PixelWrite::new(fixed, v, color)
            }
        }));
    }
    writes
}
