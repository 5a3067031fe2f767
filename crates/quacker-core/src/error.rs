use crate::geom::Point;

/// A position was queried outside of a grid's `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {pos} outside {width}x{height} grid")]
pub struct BoundsError {
    pub pos: Point,
    pub width: i32,
    pub height: i32,
}

impl BoundsError {
    pub fn new(pos: Point, width: i32, height: i32) -> Self {
        Self { pos, width, height }
    }
}
