use crate::color::Color;
use crate::error::{Error, Result};

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single cell to overwrite when drawing onto a [`Picture`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWrite {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl PixelWrite {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Immutable rectangular grid of colors.
///
/// Cells are stored row-major: the color at column `x`, row `y` lives at
/// `pixels[x + y * width]`. Every edit goes through [`Picture::draw`], which
/// copies the buffer and returns a new picture, so a picture handed to the
/// undo history never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Picture {
    /// Number of cells in a `width` x `height` grid.
    ///
    /// Both axes must be non-zero and addressable by a [`Point`].
    fn cell_count(width: usize, height: usize) -> Result<usize> {
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(Error::InvalidDimension { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Create a picture with every cell set to `color`
    pub fn empty(width: usize, height: usize, color: Color) -> Result<Self> {
        let len = Self::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Create a picture from row-major pixels
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if pixels.len() != Self::cell_count(width, height)? {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    fn out_of_range(&self, x: i32, y: i32) -> Error {
        Error::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Color of the cell at column `x`, row `y`
    pub fn pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.index(x, y)
            .map(|i| self.pixels[i])
            .ok_or_else(|| self.out_of_range(x, y))
    }

    /// Apply `writes` in order to a copy of this picture.
    ///
    /// Later writes to the same cell win. If any write is out of range the
    /// whole call fails and no new picture is produced.
    pub fn draw(&self, writes: &[PixelWrite]) -> Result<Picture> {
        let indices = writes
            .iter()
            .map(|w| self.index(w.x, w.y).ok_or_else(|| self.out_of_range(w.x, w.y)))
            .collect::<Result<Vec<_>>>()?;

        let mut pixels = self.pixels.clone();
        for (i, write) in indices.into_iter().zip(writes) {
            pixels[i] = write.color;
        }
        Ok(Picture {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// Inclusive bounding box of the cells that differ from `other`.
    ///
    /// Returns `None` when the pictures are identical or have different sizes.
    pub fn changed_bounds(&self, other: &Picture) -> Option<(Point, Point)> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        let mut bounds: Option<(Point, Point)> = None;
        let changed = self
            .pixels
            .iter()
            .zip(&other.pixels)
            .enumerate()
            .filter(|(_, (a, b))| a != b);
        for (i, _) in changed {
            let p = Point::new((i % self.width) as i32, (i / self.width) as i32);
            bounds = Some(match bounds {
                None => (p, p),
                Some((min, max)) => (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                ),
            });
        }
        bounds
    }
}
