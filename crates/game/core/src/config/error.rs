//! Configuration validation errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors produced when a [`GameConfig`](super::GameConfig) violates its invariants.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// The machine must have at least one reel.
    #[error("reel count must be at least 1")]
    NoReels,

    /// Each reel must show at least one symbol.
    #[error("visible symbol count must be at least 1")]
    NoVisibleSymbols,

    /// Symbols are drawn from the palette, so it cannot be empty.
    #[error("symbol palette is empty")]
    EmptyPalette,

    /// Two palette entries share an identifier.
    #[error("symbol id {id:?} appears more than once in the palette")]
    DuplicateSymbol { id: String },

    /// `min_spin_duration_ms` exceeds `max_spin_duration_ms`.
    #[error("min spin duration {min_ms}ms exceeds max spin duration {max_ms}ms")]
    InvalidSpinRange { min_ms: u32, max_ms: u32 },

    /// Spin progress divides by the duration, so it must be positive.
    #[error("min spin duration must be positive")]
    NonPositiveDuration,

    /// Spin speed must be a finite, non-negative number.
    #[error("spin speed {speed} is not a finite non-negative number")]
    InvalidSpinSpeed { speed: f64 },

    /// `symbol_size + symbol_spacing` must be a finite positive number.
    #[error("symbol height {height} is not a finite positive number")]
    DegenerateSymbolHeight { height: f64 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            NoReels => "CONFIG_NO_REELS",
            NoVisibleSymbols => "CONFIG_NO_VISIBLE_SYMBOLS",
            EmptyPalette => "CONFIG_EMPTY_PALETTE",
            DuplicateSymbol { .. } => "CONFIG_DUPLICATE_SYMBOL",
            InvalidSpinRange { .. } => "CONFIG_INVALID_SPIN_RANGE",
            NonPositiveDuration => "CONFIG_NON_POSITIVE_DURATION",
            InvalidSpinSpeed { .. } => "CONFIG_INVALID_SPIN_SPEED",
            DegenerateSymbolHeight { .. } => "CONFIG_DEGENERATE_SYMBOL_HEIGHT",
        }
    }
}
