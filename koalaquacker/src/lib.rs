//! koalaquacker: ducks and koalas navigating a current-swept board.
//!
//! The driver side of the workspace: configuration, a fixed-rate
//! [`TickClock`], the [`World`] that steps every agent once per tick, and a
//! plain-text [`render`]er.

pub mod cli;
pub mod clock;
pub mod config;
pub mod logger;
pub mod render;
pub mod world;

pub use clock::TickClock;
pub use config::{ConfigError, SimConfig};
pub use render::render;
pub use world::{Agent, Move, World, WorldError};
