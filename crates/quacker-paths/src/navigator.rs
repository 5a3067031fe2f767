//! The resumable shortest-path state machine.
//!
//! A [`Navigator`] performs one bounded slice of a Dijkstra search per call
//! to [`step`](Navigator::step) and then follows the route it found, one
//! waypoint per call. All of its mutable state is owned; the terrain is
//! only ever read through a [`CostQuery`].

use std::collections::VecDeque;
use std::fmt;

use quacker_core::{BoundsError, Direction, Point, Traveler};

use crate::edge::Edge;
use crate::error::NavError;
use crate::frontier::Frontier;
use crate::path::{Progress, ProgressMap, reconstruct};
use crate::traits::CostQuery;

/// Externally visible lifecycle tag of a [`Navigator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavState {
    /// Created, search not seeded yet.
    Init,
    /// Draining the frontier.
    Thinking,
    /// Following the reconstructed route.
    Transitioning,
    /// Terminal.
    Done,
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NavState::Init => "init",
            NavState::Thinking => "thinking",
            NavState::Transitioning => "transitioning",
            NavState::Done => "done",
        };
        f.write_str(s)
    }
}

/// Per-state payload.
#[derive(Debug)]
enum Phase {
    Init,
    Thinking(Frontier),
    Transitioning(VecDeque<Point>),
    Done,
}

/// Step-wise shortest-path agent for one traveler.
///
/// Edge costs must be positive for the computed route to be optimal.
#[derive(Debug)]
pub struct Navigator<Q> {
    query: Q,
    traveler: Traveler,
    origin: Point,
    destination: Point,
    position: Point,
    progress: ProgressMap,
    phase: Phase,
}

impl<Q: CostQuery> Navigator<Q> {
    /// Create a navigator that will travel from `origin` to `destination`.
    ///
    /// Both endpoints must lie inside the grid described by `query`.
    pub fn new(
        query: Q,
        traveler: Traveler,
        origin: Point,
        destination: Point,
    ) -> Result<Self, NavError> {
        let (width, height) = (query.width(), query.height());
        if width <= 0 || height <= 0 {
            return Err(NavError::InvalidGrid { width, height });
        }
        let bounds = query.bounds();
        for p in [origin, destination] {
            if !bounds.contains(p) {
                return Err(BoundsError::new(p, width, height).into());
            }
        }
        Ok(Self {
            query,
            traveler,
            origin,
            destination,
            position: origin,
            progress: ProgressMap::new(),
            phase: Phase::Init,
        })
    }

    /// Perform one unit of work.
    ///
    /// Returns the direction moved while following the route, or `None`
    /// when this step did not move the navigator. An error is fatal to the
    /// search: the navigator drops its frontier and route and is `Done`
    /// from then on.
    pub fn step(&mut self) -> Result<Option<Direction>, NavError> {
        // The phase is taken by value; any early return leaves it `Done`.
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Init => {
                self.progress.insert(
                    self.origin,
                    Progress {
                        distance: 0,
                        predecessor: None,
                    },
                );
                let mut frontier = Frontier::new();
                self.expand(&mut frontier, self.origin)?;
                log::debug!(
                    "{} searching {} -> {}",
                    self.traveler,
                    self.origin,
                    self.destination
                );
                self.phase = Phase::Thinking(frontier);
                Ok(None)
            }
            Phase::Thinking(mut frontier) => {
                let Some(edge) = frontier.take() else {
                    self.begin_route();
                    return Ok(None);
                };
                self.relax(edge);
                self.expand(&mut frontier, edge.to)?;
                self.phase = Phase::Thinking(frontier);
                Ok(None)
            }
            Phase::Transitioning(mut route) => {
                let Some(next) = route.pop_front() else {
                    log::debug!("{} finished at {}", self.traveler, self.position);
                    return Ok(None);
                };
                let dir = Direction::between(self.position, next);
                self.position = next;
                self.phase = Phase::Transitioning(route);
                Ok(dir)
            }
            Phase::Done => Ok(None),
        }
    }

    /// Step until `Done` or until `max_steps` steps have run, collecting
    /// every direction emitted.
    pub fn run_to_completion(&mut self, max_steps: usize) -> Result<Vec<Direction>, NavError> {
        let mut moves = Vec::new();
        for _ in 0..max_steps {
            if self.is_done() {
                break;
            }
            if let Some(dir) = self.step()? {
                moves.push(dir);
            }
        }
        Ok(moves)
    }

    fn relax(&mut self, edge: Edge) {
        let Some(base) = self.progress.get(&edge.from).map(|p| p.distance) else {
            return;
        };
        let candidate = base + edge.weight;
        let improved = self
            .progress
            .get(&edge.to)
            .is_none_or(|known| candidate < known.distance);
        if improved {
            log::trace!(
                "{} relax {} via {} = {}",
                self.traveler,
                edge.to,
                edge.from,
                candidate
            );
            self.progress.insert(
                edge.to,
                Progress {
                    distance: candidate,
                    predecessor: Some(edge.from),
                },
            );
        }
    }

    /// Offer every in-bounds outgoing edge of `at`.
    ///
    /// Edges are prioritised by the tentative total `distance(at) + weight`,
    /// so the frontier drains in Dijkstra order. Transitions already offered
    /// are skipped without querying their cost.
    fn expand(&self, frontier: &mut Frontier, at: Point) -> Result<(), NavError> {
        let bounds = self.query.bounds();
        let base = self.progress.get(&at).map_or(0, |p| p.distance);
        for dir in Direction::ALL {
            let to = at.step(dir);
            if !bounds.contains(to) || frontier.was_offered(at, to) {
                continue;
            }
            let weight = self.query.cost_at(at, self.traveler, dir)?;
            frontier.offer(Edge::new(at, to, weight), base + weight);
        }
        Ok(())
    }

    fn begin_route(&mut self) {
        let mut route = reconstruct(&self.progress, self.destination);
        if route.first() == Some(&self.origin) {
            self.position = route[0];
            log::debug!(
                "{} route found: {} waypoints, cost {}, {} positions visited",
                self.traveler,
                route.len(),
                self.distance_to(self.destination).unwrap_or_default(),
                self.progress.len()
            );
        } else {
            log::warn!(
                "{} cannot reach {} from {}",
                self.traveler,
                self.destination,
                self.origin
            );
            route.clear();
        }
        self.phase = Phase::Transitioning(route.into());
    }
}

impl<Q> Navigator<Q> {
    /// Current lifecycle tag.
    pub fn state(&self) -> NavState {
        match self.phase {
            Phase::Init => NavState::Init,
            Phase::Thinking(_) => NavState::Thinking,
            Phase::Transitioning(_) => NavState::Transitioning,
            Phase::Done => NavState::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Current grid position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    pub fn traveler(&self) -> Traveler {
        self.traveler
    }

    /// The terrain collaborator.
    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Whether the navigator stands on its destination.
    pub fn arrived(&self) -> bool {
        self.position == self.destination
    }

    /// Waypoints still to be visited. Empty outside of `Transitioning`.
    pub fn route(&self) -> impl Iterator<Item = Point> + '_ {
        let waypoints = match &self.phase {
            Phase::Transitioning(route) => Some(route),
            _ => None,
        };
        waypoints.into_iter().flatten().copied()
    }

    /// The edge the search will examine next, while thinking.
    pub fn next_edge(&self) -> Option<&Edge> {
        match &self.phase {
            Phase::Thinking(frontier) => frontier.peek(),
            _ => None,
        }
    }

    /// Best known distance to `p`.
    pub fn distance_to(&self, p: Point) -> Option<i32> {
        self.progress.get(&p).map(|e| e.distance)
    }

    /// The position `p` was cheapest reached from.
    pub fn predecessor_of(&self, p: Point) -> Option<Point> {
        self.progress.get(&p).and_then(|e| e.predecessor)
    }

    /// Number of positions with a known distance.
    pub fn visited(&self) -> usize {
        self.progress.len()
    }

    /// The full distance/predecessor map.
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }
}
