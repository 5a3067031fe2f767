//! Terrain variants and their traveler cost rules.
//!
//! The cost of a move is charged on the tile being *left*, and depends on
//! who is moving and in which direction. Every rule matches
//! [`Traveler`] exhaustively.

use quacker_core::{Direction, Traveler};

use crate::error::TerrainError;

/// Largest discount or surcharge a current of power 1.0 applies.
pub const MAX_COST_CHANGE: i32 = 50;

/// Cost of leaving a land tile.
pub const fn land_cost(traveler: Traveler) -> i32 {
    match traveler {
        Traveler::Duck => 100,
        Traveler::Koala => 20,
    }
}

/// Cost of leaving a water tile before the current is applied.
pub const fn water_cost(traveler: Traveler) -> i32 {
    match traveler {
        Traveler::Duck => 75,
        Traveler::Koala => 150,
    }
}

/// A directed water current of strength `power` in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCurrent")
)]
pub struct Current {
    direction: Direction,
    power: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurrent {
    direction: Direction,
    power: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurrent> for Current {
    type Error = TerrainError;

    fn try_from(raw: RawCurrent) -> Result<Self, Self::Error> {
        Current::new(raw.direction, raw.power)
    }
}

impl Current {
    /// Create a current, rejecting powers outside `[0, 1]` (and NaN).
    pub fn new(direction: Direction, power: f64) -> Result<Self, TerrainError> {
        if !(0.0..=1.0).contains(&power) {
            return Err(TerrainError::InvalidPower(power));
        }
        Ok(Self { direction, power })
    }

    /// The way the water flows.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Signed cost change for moving in `dir`: a discount going with the
    /// flow, an equal surcharge going against it, nothing across it.
    pub fn adjustment(&self, dir: Direction) -> i32 {
        let change = (self.power * f64::from(MAX_COST_CHANGE)) as i32;
        if dir == self.direction {
            -change
        } else if dir == self.direction.opposite() {
            change
        } else {
            0
        }
    }
}

/// The ground occupying one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Land,
    Current(Current),
}

impl Terrain {
    /// Shorthand for a validated [`Terrain::Current`].
    pub fn current(direction: Direction, power: f64) -> Result<Self, TerrainError> {
        Current::new(direction, power).map(Terrain::Current)
    }

    /// Cost for `traveler` to leave this tile heading `dir`.
    pub fn cost(&self, traveler: Traveler, dir: Direction) -> i32 {
        match self {
            Terrain::Land => land_cost(traveler),
            Terrain::Current(c) => water_cost(traveler) + c.adjustment(dir),
        }
    }

    pub fn is_land(&self) -> bool {
        matches!(self, Terrain::Land)
    }

    /// Map character: `.` for land, an arrow-like mark for water.
    pub fn glyph(&self) -> char {
        match self {
            Terrain::Land => '.',
            Terrain::Current(c) => match c.direction {
                Direction::North => '^',
                Direction::East => '>',
                Direction::South => 'v',
                Direction::West => '<',
            },
        }
    }
}
