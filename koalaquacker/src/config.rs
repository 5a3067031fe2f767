//! Simulation configuration.

use std::time::Duration;

pub const DEFAULT_WIDTH: i32 = 16;
pub const DEFAULT_HEIGHT: i32 = 16;
pub const DEFAULT_SEED: u64 = 5;
pub const DEFAULT_TICK_MS: u64 = 70;
pub const DEFAULT_FRAME_MS: u64 = 1000 / 30;
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    BoardSize { width: i32, height: i32 },
    #[error("tick period must be non-zero")]
    ZeroTick,
    #[error("frame period must be non-zero")]
    ZeroFrame,
}

/// Everything needed to set up and drive one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    /// Seeds both board generation and agent placement.
    pub seed: u64,
    pub ducks: usize,
    pub koalas: usize,
    /// Logical step period: every agent gets one `step` per tick.
    pub tick: Duration,
    /// Poll/render period in real-time mode.
    pub frame: Duration,
    /// Hard cap on ticks before the driver gives up.
    pub max_ticks: u64,
    /// Pace ticks against the wall clock instead of running them
    /// back-to-back.
    pub realtime: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            ducks: 1,
            koalas: 0,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
            max_ticks: DEFAULT_MAX_TICKS,
            realtime: false,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::BoardSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        if self.frame.is_zero() {
            return Err(ConfigError::ZeroFrame);
        }
        Ok(())
    }
}
