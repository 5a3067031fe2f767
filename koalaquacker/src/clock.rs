//! Fixed-rate tick pacing, decoupled from the frame rate.

use std::time::Duration;

/// Accumulates frame time and releases a logical tick once a full tick
/// period has elapsed.
///
/// Releasing a tick resets the accumulator to zero; time beyond the period
/// is dropped, so a slow frame never produces a burst of ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    elapsed: Duration,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Record `dt` of frame time. Returns whether a tick is due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed = Duration::ZERO;
            return true;
        }
        false
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}
