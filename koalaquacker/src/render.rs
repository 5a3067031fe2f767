//! Plain-text presentation of a [`World`].

use std::collections::HashMap;
use std::fmt::Write;

use quacker_core::Point;

use crate::world::World;

const ROUTE: char = '*';
const DESTINATION: char = 'X';

/// Draw the board, one character per cell, followed by one status line per
/// agent.
///
/// Layers, lowest first: terrain, the first agent's remaining route,
/// destinations, agents.
pub fn render(world: &World) -> String {
    let mut overlay: HashMap<Point, char> = HashMap::new();
    if let Some(first) = world.agents().first() {
        for p in first.navigator.route() {
            overlay.insert(p, ROUTE);
        }
    }
    for agent in world.agents() {
        overlay.insert(agent.navigator.destination(), DESTINATION);
    }
    for agent in world.agents() {
        overlay.insert(agent.position(), agent.traveler().glyph());
    }

    let grid = world.board().grid();
    let mut out = String::with_capacity(grid.bounds().len() + grid.height() as usize);
    for (p, terrain) in grid.iter() {
        out.push(overlay.get(&p).copied().unwrap_or_else(|| terrain.glyph()));
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    for agent in world.agents() {
        let _ = writeln!(
            out,
            "{} #{} {} at {} -> {}",
            agent.traveler(),
            agent.id,
            agent.state(),
            agent.position(),
            agent.navigator.destination()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quacker_core::{Direction, Traveler};
    use quacker_terrain::{Board, Terrain};

    #[test]
    fn draws_terrain_agents_and_status() {
        let flow = Terrain::current(Direction::West, 0.5).unwrap();
        let board = Board::from_rows(3, 2, vec![Terrain::Land, flow, flow, flow, flow, flow])
            .unwrap();
        let mut world = World::new(board);
        world
            .spawn(Traveler::Duck, Point::new(0, 0), Point::new(2, 1))
            .unwrap();
        assert_eq!(render(&world), "D<<\n<<X\nduck #0 init at (0, 0) -> (2, 1)\n");
    }

    #[test]
    fn shows_remaining_route() {
        let mut world = World::new(Board::uniform(3, 1, Terrain::Land));
        world
            .spawn(Traveler::Koala, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        while world.agents()[0].state() != quacker_paths::NavState::Transitioning {
            world.tick();
        }
        let frame = render(&world);
        assert!(frame.starts_with("K*X\n"));
        assert!(frame.contains("koala #0 transitioning"));
    }
}
