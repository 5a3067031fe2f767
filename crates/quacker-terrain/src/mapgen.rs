//! Seeded board generation.
//!
//! A tiling value-noise field is sampled once per cell. Cells above
//! [`THRESHOLD`] become land; the rest become water whose current flows
//! toward the neighbouring sample with the biggest drop in noise.

use quacker_core::{Direction, Grid, Point};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::board::Board;
use crate::terrain::Terrain;

/// Noise level separating water (at or below) from land (above).
pub const THRESHOLD: f64 = 0.0;

/// Noise-space distance between neighbouring cells.
const COORDINATE_SCALE: f64 = 1.5 / 5.0;

/// Lattice points per noise axis before the field repeats.
const LATTICE_SIZE: usize = 16;

/// Smoothly interpolated lattice noise in `[-1, 1]`, tiling every
/// `size` units on both axes.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    lattice: Vec<f64>,
    size: usize,
}

impl ValueNoise {
    /// Fill a `size` x `size` lattice with random values.
    pub fn new(rng: &mut impl Rng, size: usize) -> Self {
        let size = size.max(1);
        let lattice = (0..size * size)
            .map(|_| rng.random_range(-1.0..=1.0))
            .collect();
        Self { lattice, size }
    }

    fn at(&self, x: i64, y: i64) -> f64 {
        let n = self.size as i64;
        let (x, y) = (x.rem_euclid(n) as usize, y.rem_euclid(n) as usize);
        self.lattice[y * self.size + x]
    }

    /// Sample the field at an arbitrary point.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        let (x0, y0) = (x.floor(), y.floor());
        let (tx, ty) = (smoothstep(x - x0), smoothstep(y - y0));
        let (ix, iy) = (x0 as i64, y0 as i64);
        let top = lerp(self.at(ix, iy), self.at(ix + 1, iy), tx);
        let bottom = lerp(self.at(ix, iy + 1), self.at(ix + 1, iy + 1), tx);
        lerp(top, bottom, ty)
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Terrain for cell `p` of a board sampled from `noise`.
///
/// Water flows toward the neighbouring sample with the biggest drop. Equal
/// drops keep the first direction in [`Direction::ALL`] order (North first).
pub fn terrain_for(noise: &ValueNoise, p: Point) -> Terrain {
    let (nx, ny) = (f64::from(p.x) * COORDINATE_SCALE, f64::from(p.y) * COORDINATE_SCALE);
    let level = noise.eval(nx, ny);
    if level > THRESHOLD {
        return Terrain::Land;
    }
    let mut flow = Direction::ALL[0];
    let mut steepest = f64::NEG_INFINITY;
    for dir in Direction::ALL {
        let d = dir.delta();
        let drop = level - noise.eval(nx + f64::from(d.x), ny + f64::from(d.y));
        if drop > steepest {
            steepest = drop;
            flow = dir;
        }
    }
    let power = ((level + 1.0) / (THRESHOLD + 1.0)).clamp(0.0, 1.0);
    Terrain::current(flow, power).unwrap_or_default()
}

/// Generate a `width` x `height` board. The same seed always yields the
/// same board.
pub fn generate(width: i32, height: i32, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = ValueNoise::new(&mut rng, LATTICE_SIZE);
    let board = Board::new(Grid::from_fn(width, height, |p| terrain_for(&noise, p)));
    log::debug!(
        "generated {}x{} board from seed {}: {} land tiles",
        width,
        height,
        seed,
        board.land_count()
    );
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use quacker_paths::CostQuery;

    #[test]
    fn same_seed_same_board() {
        assert_eq!(generate(16, 16, 5), generate(16, 16, 5));
    }

    #[test]
    fn board_has_requested_size() {
        let b = generate(7, 3, 1);
        assert_eq!(b.width(), 7);
        assert_eq!(b.height(), 3);
        assert_eq!(b.grid().iter().count(), 21);
    }

    #[test]
    fn noise_stays_in_range_and_tiles() {
        let mut rng = StdRng::seed_from_u64(9);
        let noise = ValueNoise::new(&mut rng, 4);
        for i in 0..40 {
            let x = f64::from(i) * 0.37 - 5.0;
            let y = f64::from(i) * 0.91 - 3.0;
            let v = noise.eval(x, y);
            assert!((-1.0..=1.0).contains(&v));
            assert!((v - noise.eval(x + 4.0, y - 8.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn noise_hits_lattice_values_on_integers() {
        let mut rng = StdRng::seed_from_u64(3);
        let noise = ValueNoise::new(&mut rng, 8);
        assert_eq!(noise.eval(2.0, 5.0), noise.at(2, 5));
    }

    #[test]
    fn level_water_flows_north() {
        let noise = ValueNoise {
            lattice: vec![-0.5; 16],
            size: 4,
        };
        let t = terrain_for(&noise, Point::new(2, 1));
        assert_eq!(t, Terrain::current(Direction::North, 0.5).unwrap());
    }

    #[test]
    fn water_powers_are_fractions() {
        for seed in 0..8 {
            for (_, t) in generate(12, 12, seed).grid().iter() {
                if let Terrain::Current(c) = t {
                    assert!((0.0..=1.0).contains(&c.power()));
                }
            }
        }
    }

    #[test]
    fn generated_board_mixes_terrain() {
        let mixed = (0..16).any(|seed| {
            let b = generate(16, 16, seed);
            let land = b.land_count();
            land > 0 && land < 256
        });
        assert!(mixed);
    }
}
