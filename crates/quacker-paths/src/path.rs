//! Best-known distances and route reconstruction.

use std::collections::HashMap;

use quacker_core::Point;

/// Best known distance to a position and the position it was reached from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub distance: i32,
    /// `None` only for the search origin.
    pub predecessor: Option<Point>,
}

/// Distance/predecessor map built up by a search.
pub type ProgressMap = HashMap<Point, Progress>;

/// Walk predecessors back from `destination` and return the route in
/// origin-to-destination order.
///
/// The destination is always the last element. If the destination was never
/// reached the result is just `[destination]`; if the chain breaks early the
/// result starts wherever predecessors run out.
pub fn reconstruct(progress: &ProgressMap, destination: Point) -> Vec<Point> {
    let mut route = vec![destination];
    let mut cur = destination;
    while let Some(prev) = progress.get(&cur).and_then(|p| p.predecessor) {
        if route.len() > progress.len() {
            break;
        }
        route.push(prev);
        cur = prev;
    }
    route.reverse();
    route
}
