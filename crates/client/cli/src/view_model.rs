//! Framework-agnostic view of the reels.
//!
//! Converts a [`GameState`] snapshot into positioned symbol tiles and button
//! affordances, in layout units. Widgets scale these into terminal cells.
use slot_core::{GameConfig, GameState, ReelData, ReelPhase, Symbol};

/// One symbol tile on screen, in reel-local layout units.
#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    pub symbol: Symbol,
    /// Top edge relative to the top of the visible window.
    pub y: f64,
    pub visible: bool,
}

/// One reel column.
#[derive(Clone, Debug, PartialEq)]
pub struct ReelView {
    pub id: usize,
    pub phase: ReelPhase,
    /// Left edge relative to the board.
    pub x: f64,
    pub tiles: Vec<TileView>,
}

impl ReelView {
    /// Positions every tile of `reel` for its current offset.
    ///
    /// Tiles scroll upward by the offset modulo the strip length and wrap
    /// around once they leave the overscan margin.
    pub fn new(config: &GameConfig, reel: &ReelData) -> Self {
        let height = config.symbol_height();
        let visible_height = config.visible_height();
        let strip = height * reel.symbols.len() as f64;
        let scroll = if strip > 0.0 {
            reel.current_offset.rem_euclid(strip)
        } else {
            0.0
        };

        let tiles = reel
            .symbols
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                let mut y = index as f64 * height - scroll;
                if y < -height {
                    y += strip;
                } else if y > visible_height + height {
                    y -= strip;
                }
                let visible = y + config.layout.symbol_size > 0.0 && y < visible_height;
                TileView {
                    symbol: tile.symbol.clone(),
                    y,
                    visible,
                }
            })
            .collect();

        Self {
            id: reel.id,
            phase: reel.phase,
            x: reel.id as f64 * (config.layout.symbol_size + config.layout.reel_spacing),
            tiles,
        }
    }

    /// Visible tiles paired with their index in [`ReelView::tiles`].
    pub fn visible_tiles(&self) -> impl Iterator<Item = (usize, &TileView)> {
        self.tiles.iter().enumerate().filter(|(_, tile)| tile.visible)
    }
}

/// Spin button affordance.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
    /// 1.0 when interactive, dimmed to 0.5 while reels move.
    pub opacity: f32,
}

impl ButtonView {
    pub fn new(enabled: bool) -> Self {
        Self {
            label: "SPIN",
            enabled,
            opacity: if enabled { 1.0 } else { 0.5 },
        }
    }
}

/// Everything the UI needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub reels: Vec<ReelView>,
    pub button: ButtonView,
    pub is_spinning: bool,
    pub visible_height: f64,
}

impl BoardView {
    pub fn new(config: &GameConfig, state: &GameState) -> Self {
        let reels = state
            .reels
            .iter()
            .map(|reel| ReelView::new(config, reel))
            .collect();

        Self {
            reels,
            button: ButtonView::new(state.spin_button_enabled),
            is_spinning: state.is_spinning,
            visible_height: config.visible_height(),
        }
    }

    /// Re-positions only the reels whose phase or offset changed since
    /// `previous`.
    pub fn update(&mut self, config: &GameConfig, previous: &GameState, state: &GameState) {
        if self.reels.len() != state.reels.len() {
            *self = Self::new(config, state);
            return;
        }
        for index in state.changed_reels(previous) {
            self.reels[index] = ReelView::new(config, &state.reels[index]);
        }
        self.button = ButtonView::new(state.spin_button_enabled);
        self.is_spinning = state.is_spinning;
    }
}
