use std::rc::Rc;
use std::sync::Arc;

use quacker_core::{BoundsError, Direction, Point, Range, Traveler};

/// Read-only terrain query surface consumed by a [`Navigator`](crate::Navigator).
///
/// Implementations must be safe to query from many navigators at once; the
/// navigator never mutates the collaborator.
pub trait CostQuery {
    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    /// Cost for `traveler` to leave cell `p` heading in `dir`.
    ///
    /// Must be defined for every `p` in `[0, width) x [0, height)`.
    fn cost_at(&self, p: Point, traveler: Traveler, dir: Direction) -> Result<i32, BoundsError>;

    /// The queryable rectangle.
    fn bounds(&self) -> Range {
        Range::sized(self.width(), self.height())
    }
}

impl<Q: CostQuery + ?Sized> CostQuery for &Q {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn cost_at(&self, p: Point, traveler: Traveler, dir: Direction) -> Result<i32, BoundsError> {
        (**self).cost_at(p, traveler, dir)
    }
}

impl<Q: CostQuery + ?Sized> CostQuery for Rc<Q> {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn cost_at(&self, p: Point, traveler: Traveler, dir: Direction) -> Result<i32, BoundsError> {
        (**self).cost_at(p, traveler, dir)
    }
}

impl<Q: CostQuery + ?Sized> CostQuery for Arc<Q> {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn cost_at(&self, p: Point, traveler: Traveler, dir: Direction) -> Result<i32, BoundsError> {
        (**self).cost_at(p, traveler, dir)
    }
}
