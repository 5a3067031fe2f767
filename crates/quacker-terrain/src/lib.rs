//! Terrain model for koalaquacker boards.
//!
//! - [`Terrain`] variants and the per-[`Traveler`](quacker_core::Traveler)
//!   cost table ([`land_cost`], [`water_cost`], [`MAX_COST_CHANGE`])
//! - [`Board`], the read-only grid implementing
//!   [`CostQuery`](quacker_paths::CostQuery)
//! - [`generate`], seeded noise-based board generation

pub mod board;
pub mod error;
pub mod mapgen;
pub mod terrain;

pub use board::Board;
pub use error::TerrainError;
pub use mapgen::{THRESHOLD, ValueNoise, generate};
pub use terrain::{Current, MAX_COST_CHANGE, Terrain, land_cost, water_cost};
