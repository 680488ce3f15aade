//! Pure per-reel transitions.
//!
//! Each function takes the previous reel by reference and returns a new
//! value; the engine assembles the results into a fresh [`GameState`].
//!
//! [`GameState`]: crate::state::GameState

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{ReelData, ReelPhase};

/// Progress above which a spinning reel is labelled [`ReelPhase::Stopping`].
pub const STOPPING_PROGRESS: f64 = 0.8;

/// Randomly drawn parameters for one reel's spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinParams {
    pub duration_ms: f64,
    pub target_offset: f64,
}

impl SpinParams {
    /// Draws a duration uniformly from the configured range and a target
    /// offset on a symbol boundary.
    pub fn draw<R>(config: &GameConfig, rng: &mut R) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let duration_ms = rng.uniform_f64(
            f64::from(config.reels.min_spin_duration_ms),
            f64::from(config.reels.max_spin_duration_ms),
        );
        let stop = rng.uniform_index(config.symbols.len());
        let target_offset = stop as f64 * config.symbol_height();

        Self {
            duration_ms,
            target_offset,
        }
    }
}

/// Puts a reel into motion. The current offset is kept as-is.
pub fn begin_spin(reel: &ReelData, params: SpinParams, now_ms: f64) -> ReelData {
    ReelData {
        phase: ReelPhase::Spinning,
        spin_duration: params.duration_ms,
        start_time: now_ms,
        target_offset: params.target_offset,
        ..reel.clone()
    }
}

/// Advances a reel by one frame.
///
/// Idle reels are returned unchanged. Once the spin duration has elapsed the
/// reel snaps to its target offset regardless of the offset it accrued;
/// before that, the offset grows at a constant `spin_speed`.
pub fn advance_reel(reel: &ReelData, now_ms: f64, dt_seconds: f64, spin_speed: f64) -> ReelData {
    if reel.phase.is_idle() {
        return reel.clone();
    }

    let progress = reel.progress(now_ms);
    if progress >= 1.0 {
        return ReelData {
            phase: ReelPhase::Idle,
            current_offset: reel.target_offset,
            ..reel.clone()
        };
    }

    let phase = if progress > STOPPING_PROGRESS {
        ReelPhase::Stopping
    } else {
        ReelPhase::Spinning
    };

    ReelData {
        phase,
        current_offset: reel.current_offset + spin_speed * dt_seconds,
        ..reel.clone()
    }
}
