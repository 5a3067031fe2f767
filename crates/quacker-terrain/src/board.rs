//! The immutable terrain board navigators query for edge costs.

use quacker_core::{BoundsError, Direction, Grid, Point, Range, Traveler};
use quacker_paths::CostQuery;

use crate::error::TerrainError;
use crate::terrain::Terrain;

/// A rectangular map of [`Terrain`] cells.
///
/// Read-only after construction, so one board can back any number of
/// navigators, including across threads behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Grid<Terrain>,
}

impl Board {
    /// Wrap an existing terrain grid.
    pub fn new(cells: Grid<Terrain>) -> Self {
        Self { cells }
    }

    /// A board covered by one kind of terrain.
    pub fn uniform(width: i32, height: i32, terrain: Terrain) -> Self {
        Self::new(Grid::from_fn(width, height, |_| terrain))
    }

    /// Build a board from row-major cells.
    pub fn from_rows(width: i32, height: i32, cells: Vec<Terrain>) -> Result<Self, TerrainError> {
        let expected = Range::sized(width, height).len();
        Grid::from_vec(width, height, cells)
            .map(Self::new)
            .map_err(|cells| TerrainError::Shape {
                expected,
                found: cells.len(),
            })
    }

    /// Terrain at `p`.
    pub fn terrain_at(&self, p: Point) -> Result<&Terrain, BoundsError> {
        self.cells.try_get(p)
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid<Terrain> {
        &self.cells
    }

    /// Number of land tiles.
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|(_, t)| t.is_land()).count()
    }
}

impl CostQuery for Board {
    fn width(&self) -> i32 {
        self.cells.width()
    }

    fn height(&self) -> i32 {
        self.cells.height()
    }

    fn cost_at(&self, p: Point, traveler: Traveler, dir: Direction) -> Result<i32, BoundsError> {
        Ok(self.terrain_at(p)?.cost(traveler, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quacker_paths::{NavState, Navigator};

    fn water(dir: Direction, power: f64) -> Terrain {
        Terrain::current(dir, power).unwrap()
    }

    #[test]
    fn cost_follows_departure_tile() {
        let board = Board::from_rows(
            2,
            1,
            vec![Terrain::Land, water(Direction::West, 1.0)],
        )
        .unwrap();
        assert_eq!(
            board.cost_at(Point::new(0, 0), Traveler::Duck, Direction::East),
            Ok(100)
        );
        assert_eq!(
            board.cost_at(Point::new(1, 0), Traveler::Duck, Direction::West),
            Ok(25)
        );
        assert_eq!(
            board.cost_at(Point::new(1, 0), Traveler::Koala, Direction::East),
            Ok(200)
        );
    }

    #[test]
    fn out_of_bounds_cost_is_an_error() {
        let board = Board::uniform(3, 2, Terrain::Land);
        let err = board
            .cost_at(Point::new(3, 0), Traveler::Duck, Direction::East)
            .unwrap_err();
        assert_eq!(err, BoundsError::new(Point::new(3, 0), 3, 2));
    }

    #[test]
    fn from_rows_checks_shape() {
        let err = Board::from_rows(2, 2, vec![Terrain::Land; 3]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::Shape {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn duck_steps_onto_adjacent_land() {
        let board = Board::uniform(4, 4, Terrain::Land);
        let o = Point::new(1, 1);
        let d = Point::new(1, 2);
        let mut nav = Navigator::new(&board, Traveler::Duck, o, d).unwrap();
        while matches!(nav.state(), NavState::Init | NavState::Thinking) {
            nav.step().unwrap();
        }
        assert_eq!(nav.route().collect::<Vec<_>>(), vec![o, d]);
        assert_eq!(nav.distance_to(d), Some(100));
        let moves = nav.run_to_completion(64).unwrap();
        assert_eq!(moves, vec![Direction::South]);
        assert!(nav.arrived());
    }

    #[test]
    fn duck_rides_the_current_and_koala_walks() {
        // Top row is a strong eastward current, bottom row is land.
        //   > > >
        //   . . .
        let flow = water(Direction::East, 1.0);
        let board = Board::from_rows(
            3,
            2,
            vec![
                flow,
                flow,
                flow,
                Terrain::Land,
                Terrain::Land,
                Terrain::Land,
            ],
        )
        .unwrap();
        let o = Point::new(0, 0);
        let d = Point::new(2, 0);

        let mut duck = Navigator::new(&board, Traveler::Duck, o, d).unwrap();
        duck.run_to_completion(1_000).unwrap();
        assert_eq!(duck.distance_to(d), Some(50));
        assert!(duck.arrived());

        // Koala pays 100 per eastward water move; dropping to land costs
        // 150, walking 20 + 20, climbing back out of land 20: 210 > 200.
        let mut koala = Navigator::new(&board, Traveler::Koala, o, d).unwrap();
        koala.run_to_completion(1_000).unwrap();
        assert_eq!(koala.distance_to(d), Some(200));
        assert!(koala.arrived());
    }

    #[test]
    fn upstream_is_dearer_than_downstream() {
        let flow = water(Direction::East, 1.0);
        let board = Board::uniform(4, 1, flow);
        let mut down = Navigator::new(&board, Traveler::Duck, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        let mut up = Navigator::new(&board, Traveler::Duck, Point::new(3, 0), Point::new(0, 0))
            .unwrap();
        down.run_to_completion(1_000).unwrap();
        up.run_to_completion(1_000).unwrap();
        assert_eq!(down.distance_to(Point::new(3, 0)), Some(75));
        assert_eq!(up.distance_to(Point::new(0, 0)), Some(375));
    }
}
