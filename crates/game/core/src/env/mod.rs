//! Oracles for the non-deterministic inputs of a spin.
//!
//! Randomness and time are injected instead of read from ambient globals. The
//! [`SpinEnv`] aggregate bundles them so the engine can draw spin parameters
//! without hard coupling to concrete implementations.
mod clock;
mod rng;

pub use clock::{Clock, FrameClock, SystemClock};
pub use rng::{PcgRng, RngOracle};

/// Aggregates the oracles consulted by the engine.
#[derive(Clone, Debug)]
pub struct SpinEnv<R, C>
where
    R: RngOracle,
    C: Clock,
{
    pub rng: R,
    pub clock: C,
}

/// Deterministic environment: seeded RNG and a frame-driven clock.
pub type FrameEnv = SpinEnv<PcgRng, FrameClock>;

impl<R, C> SpinEnv<R, C>
where
    R: RngOracle,
    C: Clock,
{
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }
}

impl FrameEnv {
    /// Seeded generator with a clock starting at zero.
    pub fn seeded(seed: u64) -> Self {
        Self::new(PcgRng::seeded(seed), FrameClock::new())
    }
}
