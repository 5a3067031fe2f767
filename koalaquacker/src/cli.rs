//! Command-line arguments.

use std::time::Duration;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::config::{
    DEFAULT_FRAME_MS, DEFAULT_HEIGHT, DEFAULT_MAX_TICKS, DEFAULT_SEED, DEFAULT_TICK_MS,
    DEFAULT_WIDTH, SimConfig,
};

/// Ducks and koalas plan cheapest routes across land and water currents,
/// one bounded step per tick.
#[derive(Parser, Debug)]
#[command(name = "koalaquacker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board width in tiles
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Board height in tiles
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Seed for board generation and traveler placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of ducks
    #[arg(long, default_value_t = 1)]
    pub ducks: usize,

    /// Number of koalas
    #[arg(long, default_value_t = 0)]
    pub koalas: usize,

    /// Milliseconds per logical tick
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Milliseconds per frame in real-time mode
    #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
    pub frame_ms: u64,

    /// Stop after this many ticks even if travelers are still going
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    pub max_ticks: u64,

    /// Pace ticks against the wall clock and redraw as they happen
    #[arg(long)]
    pub realtime: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn config(&self) -> SimConfig {
        SimConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            ducks: self.ducks,
            koalas: self.koalas,
            tick: Duration::from_millis(self.tick_ms),
            frame: Duration::from_millis(self.frame_ms),
            max_ticks: self.max_ticks,
            realtime: self.realtime,
        }
    }
}
