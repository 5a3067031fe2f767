//! A read-only 2D grid of typed cells.
//!
//! [`Grid`] stores its cells row-major in a plain `Vec`, so a grid of
//! `Send + Sync` cells can be shared across threads behind an `Arc` with
//! no locking. Cells are fixed once the grid is built.

use crate::error::BoundsError;
use crate::geom::{Point, Range};

/// A 2D grid of `T` values, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f` at every point in row-major order.
    ///
    /// Negative dimensions are treated as zero.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = Range::sized(width, height).iter().map(&mut f).collect();
        Self {
            cells,
            width,
            height,
        }
    }

    /// Build a grid from row-major cells.
    ///
    /// Returns the cells back if their count does not equal
    /// `width * height`.
    pub fn from_vec(width: i32, height: i32, cells: Vec<T>) -> Result<Self, Vec<T>> {
        let expected = Range::sized(width, height).len();
        if width < 0 || height < 0 || cells.len() != expected {
            return Err(cells);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn get(&self, p: Point) -> Option<&T> {
        if !self.contains(p) {
            return None;
        }
        self.cells.get(self.index(p))
    }

    /// Get the cell at a point, reporting out-of-bounds access as an error.
    pub fn try_get(&self, p: Point) -> Result<&T, BoundsError> {
        self.get(p)
            .ok_or_else(|| BoundsError::new(p, self.width, self.height))
    }

    /// Iterate over `(Point, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }
}
