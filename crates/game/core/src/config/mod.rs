//! Game configuration: reel timing, symbol palette, and layout metrics.
//!
//! A [`GameConfig`] is loaded once and never mutated. The engine refuses to
//! start from a configuration that fails [`GameConfig::validate`].
mod error;

pub use error::ConfigError;

/// A single palette entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    pub id: String,
    /// 24-bit RGB colour, `0xRRGGBB`.
    pub color: u32,
    pub label: String,
}

impl Symbol {
    pub fn new(id: impl Into<String>, color: u32, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color,
            label: label.into(),
        }
    }

    /// Splits the colour into its red, green and blue channels.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.color >> 16) & 0xFF) as u8,
            ((self.color >> 8) & 0xFF) as u8,
            (self.color & 0xFF) as u8,
        )
    }
}

/// Reel count and spin timing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReelsConfig {
    pub count: usize,
    pub visible_symbols: usize,
    /// Offset units per second.
    pub spin_speed: f64,
    pub min_spin_duration_ms: u32,
    pub max_spin_duration_ms: u32,
}

/// Layout metrics, in the same unit as reel offsets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub symbol_size: f64,
    pub symbol_spacing: f64,
    pub reel_spacing: f64,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub reels: ReelsConfig,
    pub symbols: Vec<Symbol>,
    pub layout: LayoutConfig,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REEL_COUNT: usize = 5;
    pub const DEFAULT_VISIBLE_SYMBOLS: usize = 3;
    pub const DEFAULT_SPIN_SPEED: f64 = 1000.0;
    pub const DEFAULT_MIN_SPIN_DURATION_MS: u32 = 1000;
    pub const DEFAULT_MAX_SPIN_DURATION_MS: u32 = 5000;

    /// Symbols rendered above and below the visible window so tiles can
    /// scroll in and out without popping.
    pub const OVERSCAN_SYMBOLS: usize = 2;

    pub fn new() -> Self {
        Self {
            reels: ReelsConfig {
                count: Self::DEFAULT_REEL_COUNT,
                visible_symbols: Self::DEFAULT_VISIBLE_SYMBOLS,
                spin_speed: Self::DEFAULT_SPIN_SPEED,
                min_spin_duration_ms: Self::DEFAULT_MIN_SPIN_DURATION_MS,
                max_spin_duration_ms: Self::DEFAULT_MAX_SPIN_DURATION_MS,
            },
            symbols: vec![
                Symbol::new("A", 0xFF0000, "A"),
                Symbol::new("B", 0x00FF00, "B"),
                Symbol::new("C", 0x0000FF, "C"),
                Symbol::new("D", 0xFFFF00, "D"),
                Symbol::new("E", 0xFF00FF, "E"),
                Symbol::new("F", 0x00FFFF, "F"),
            ],
            layout: LayoutConfig {
                symbol_size: 80.0,
                symbol_spacing: 10.0,
                reel_spacing: 10.0,
            },
        }
    }

    /// Distance between the tops of two consecutive symbols on a strip.
    pub fn symbol_height(&self) -> f64 {
        self.layout.symbol_size + self.layout.symbol_spacing
    }

    /// Number of symbols stored per reel (visible window plus overscan).
    pub fn symbols_per_reel(&self) -> usize {
        self.reels.visible_symbols + Self::OVERSCAN_SYMBOLS
    }

    /// Height of the visible window of a reel.
    pub fn visible_height(&self) -> f64 {
        self.symbol_height() * self.reels.visible_symbols as f64
    }

    /// Checks every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reels = &self.reels;

        if reels.count == 0 {
            return Err(ConfigError::NoReels);
        }
        if reels.visible_symbols == 0 {
            return Err(ConfigError::NoVisibleSymbols);
        }
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (index, symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..index].iter().any(|other| other.id == symbol.id) {
                return Err(ConfigError::DuplicateSymbol {
                    id: symbol.id.clone(),
                });
            }
        }
        if reels.min_spin_duration_ms > reels.max_spin_duration_ms {
            return Err(ConfigError::InvalidSpinRange {
                min_ms: reels.min_spin_duration_ms,
                max_ms: reels.max_spin_duration_ms,
            });
        }
        if reels.min_spin_duration_ms == 0 {
            return Err(ConfigError::NonPositiveDuration);
        }
        if !reels.spin_speed.is_finite() || reels.spin_speed < 0.0 {
            return Err(ConfigError::InvalidSpinSpeed {
                speed: reels.spin_speed,
            });
        }

        let height = self.symbol_height();
        if !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::DegenerateSymbolHeight { height });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
