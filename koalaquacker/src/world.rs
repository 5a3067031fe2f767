//! The board plus every traveler navigating it.

use std::sync::Arc;

use quacker_core::{Direction, Point, Traveler};
use quacker_paths::{NavError, NavState, Navigator};
use quacker_terrain::{Board, generate};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::config::{ConfigError, SimConfig};

/// Errors raised while setting up a world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Nav(#[from] NavError),
}

/// One navigating entity.
#[derive(Debug)]
pub struct Agent {
    pub id: usize,
    pub navigator: Navigator<Arc<Board>>,
}

impl Agent {
    pub fn traveler(&self) -> Traveler {
        self.navigator.traveler()
    }

    pub fn position(&self) -> Point {
        self.navigator.position()
    }

    pub fn state(&self) -> NavState {
        self.navigator.state()
    }
}

/// A direction emitted by one agent during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub agent: usize,
    pub direction: Direction,
}

/// Shared read-only board and the agents walking it.
#[derive(Debug)]
pub struct World {
    board: Arc<Board>,
    agents: Vec<Agent>,
    ticks: u64,
}

impl World {
    /// An empty world on `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            agents: Vec::new(),
            ticks: 0,
        }
    }

    /// Generate a board and place the configured travelers at seeded
    /// random origins and destinations.
    pub fn from_config(config: &SimConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let mut world = Self::new(generate(config.width, config.height, config.seed));
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
        let kinds = std::iter::repeat_n(Traveler::Duck, config.ducks)
            .chain(std::iter::repeat_n(Traveler::Koala, config.koalas));
        for traveler in kinds {
            let origin = world.random_point(&mut rng);
            let destination = world.random_point(&mut rng);
            world.spawn(traveler, origin, destination)?;
        }
        Ok(world)
    }

    fn random_point(&self, rng: &mut impl Rng) -> Point {
        let bounds = self.board.grid().bounds();
        Point::new(
            rng.random_range(0..bounds.width()),
            rng.random_range(0..bounds.height()),
        )
    }

    /// Add a traveler and return its id.
    pub fn spawn(
        &mut self,
        traveler: Traveler,
        origin: Point,
        destination: Point,
    ) -> Result<usize, NavError> {
        let navigator = Navigator::new(Arc::clone(&self.board), traveler, origin, destination)?;
        let id = self.agents.len();
        log::info!("spawned {traveler} #{id} at {origin} heading for {destination}");
        self.agents.push(Agent { id, navigator });
        Ok(id)
    }

    /// Give every agent one step: ducks first, then koalas, each in spawn
    /// order. Returns the moves made during this tick.
    ///
    /// A failing agent is logged and left `Done`; the others keep going.
    pub fn tick(&mut self) -> Vec<Move> {
        self.ticks += 1;
        let mut moves = Vec::new();
        for kind in Traveler::ALL {
            for agent in self.agents.iter_mut().filter(|a| a.traveler() == kind) {
                match agent.navigator.step() {
                    Ok(Some(direction)) => {
                        log::trace!("{kind} #{} moved {direction}", agent.id);
                        moves.push(Move {
                            agent: agent.id,
                            direction,
                        });
                    }
                    Ok(None) => {}
                    Err(err) => log::error!("{kind} #{} gave up: {err}", agent.id),
                }
            }
        }
        moves
    }

    /// Whether every agent has finished.
    pub fn all_done(&self) -> bool {
        self.agents.iter().all(|a| a.navigator.is_done())
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
}
