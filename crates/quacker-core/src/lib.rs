//! **quacker-core**: foundational types shared by the koalaquacker crates.
//!
//! Geometry primitives ([`Point`], [`Range`]), the four-way [`Direction`]
//! compass, the closed [`Traveler`] kind set, and a read-only typed
//! [`Grid`].

pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;
pub mod traveler;

pub use direction::Direction;
pub use error::BoundsError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use traveler::Traveler;
