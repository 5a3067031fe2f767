//! Incremental shortest-path navigation for grid-based simulations.
//!
//! A [`Navigator`] runs a Dijkstra search one bounded unit of work at a time
//! and then walks the route it found, one waypoint per
//! [`step`](Navigator::step). It never blocks: each call returns after a
//! fixed slice of work, so a driver can advance many navigators per tick.
//!
//! | Type | Role |
//! |---|---|
//! | [`CostQuery`] | Read-only terrain cost surface supplied by the caller |
//! | [`Edge`] | Directed transition, identified by its endpoints only |
//! | [`Frontier`] | Deduplicated min-priority edge queue |
//! | [`Navigator`] | The `Init → Thinking → Transitioning → Done` state machine |
//! | [`reconstruct`] | Predecessor walk from destination back to origin |

mod edge;
mod error;
mod frontier;
mod navigator;
mod path;
mod traits;

pub use edge::Edge;
pub use error::NavError;
pub use frontier::Frontier;
pub use navigator::{NavState, Navigator};
pub use path::{Progress, ProgressMap, reconstruct};
pub use traits::CostQuery;
