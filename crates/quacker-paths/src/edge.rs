use std::hash::{Hash, Hasher};

use quacker_core::Point;

/// A directed, weighted transition between two cells.
///
/// Identity is the `(from, to)` pair alone: two edges with the same
/// endpoints compare and hash equal whatever their weights.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    pub weight: i32,
}

impl Edge {
    /// Create a new edge.
    #[inline]
    pub const fn new(from: Point, to: Point, weight: i32) -> Self {
        Self { from, to, weight }
    }

    /// The `(from, to)` identity key.
    #[inline]
    pub const fn key(&self) -> (Point, Point) {
        (self.from, self.to)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}
