use crate::config::{GameConfig, Symbol};
use crate::env::RngOracle;

/// Spin phase of a single reel.
///
/// `Idle → Spinning → Stopping → Idle`. Stopping is a progress label only;
/// offset accrual does not change when a reel enters it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReelPhase {
    #[default]
    Idle,
    Spinning,
    Stopping,
}

impl ReelPhase {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_moving(&self) -> bool {
        !self.is_idle()
    }
}

/// One symbol tile on a reel strip, positioned in reel-local space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReelSymbol {
    pub symbol: Symbol,
    pub y: f64,
}

/// Full state of one reel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReelData {
    /// Column index; reel `i` is always the i-th column.
    pub id: usize,
    /// `visible_symbols + 2` tiles, the extra two being overscan.
    pub symbols: Vec<ReelSymbol>,
    pub phase: ReelPhase,
    pub current_offset: f64,
    pub target_offset: f64,
    /// Total spin duration in milliseconds.
    pub spin_duration: f64,
    /// Clock time, in milliseconds, at which the current spin began.
    pub start_time: f64,
}

impl ReelData {
    /// Creates an idle reel with a freshly drawn symbol strip.
    pub fn new<R>(id: usize, config: &GameConfig, rng: &mut R) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let height = config.symbol_height();
        let symbols = (0..config.symbols_per_reel())
            .map(|slot| {
                let pick = rng.uniform_index(config.symbols.len());
                ReelSymbol {
                    symbol: config.symbols[pick].clone(),
                    y: slot as f64 * height,
                }
            })
            .collect();

        Self {
            id,
            symbols,
            phase: ReelPhase::Idle,
            current_offset: 0.0,
            target_offset: 0.0,
            spin_duration: 0.0,
            start_time: 0.0,
        }
    }

    /// Fraction of the spin duration elapsed at `now_ms`, clamped to 1.
    pub fn progress(&self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.start_time;
        (elapsed / self.spin_duration).min(1.0)
    }
}
