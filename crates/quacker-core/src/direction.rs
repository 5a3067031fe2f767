//! Four-way compass directions.

use std::fmt;

use crate::geom::Point;

/// A cardinal direction on the grid.
///
/// "No movement" is never a direction: APIs that may not move return
/// `Option<Direction>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbour expansion order used throughout the crate family
    /// (up, right, down, left).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The reverse direction. Involutive: `d.opposite().opposite() == d`.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit offset of one step in this direction (Y grows down).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::South => Point::new(0, 1),
            Direction::East => Point::new(1, 0),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// The direction implied by moving from `from` to `to`.
    ///
    /// The x-delta is checked before the y-delta, so a diagonal offset
    /// resolves to East or West. Equal points yield `None`.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        if from.x < to.x {
            Some(Direction::East)
        } else if from.x > to.x {
            Some(Direction::West)
        } else if from.y < to.y {
            Some(Direction::South)
        } else if from.y > to.y {
            Some(Direction::North)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}
