//! Clock oracle used to timestamp spins and measure their progress.
//!
//! Times are milliseconds as `f64`. The engine ticks the clock with each
//! frame delta before reading it, so a [`FrameClock`] advances in lockstep
//! with `advance()` while a [`SystemClock`] follows wall time.
use std::time::Instant;

/// Monotonic time source in milliseconds.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f64;

    /// Notifies the clock that a frame of `dt_seconds` has elapsed.
    fn tick(&mut self, dt_seconds: f64) {
        let _ = dt_seconds;
    }
}

/// Clock that only moves when ticked by the frame driver.
///
/// Ticks are summed in `f64` milliseconds. Deltas that are exact binary
/// fractions of a second (`0.5`, `1.0 / 64.0`) accumulate without error, but
/// inexact ones drift: sixty ticks of `1.0 / 60.0` land just below 1000 ms, so
/// a 1000 ms spin needs a sixty-first frame to settle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    now_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms }
    }
}

impl Clock for FrameClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn tick(&mut self, dt_seconds: f64) {
        self.now_ms += dt_seconds * 1000.0;
    }
}

/// Wall clock measured from the moment it was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
