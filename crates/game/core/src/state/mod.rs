//! Authoritative game state representation.
//!
//! This module owns the data structures that describe reels and the spin
//! flags. Runtime layers clone or query this state but mutate it exclusively
//! through the engine.
mod reel;

pub use reel::{ReelData, ReelPhase, ReelSymbol};

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Canonical snapshot of the game.
///
/// `spin_button_enabled` is always the negation of `is_spinning`, and
/// `is_spinning` holds iff at least one reel is not idle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Index-aligned reels; order matters.
    pub reels: Vec<ReelData>,
    pub is_spinning: bool,
    pub spin_button_enabled: bool,
}

impl GameState {
    /// Builds the initial state: one idle reel per configured column, each
    /// with a random symbol strip.
    pub fn initialize<R>(config: &GameConfig, rng: &mut R) -> Self
    where
        R: RngOracle + ?Sized,
    {
        let reels = (0..config.reels.count)
            .map(|id| ReelData::new(id, config, rng))
            .collect();

        Self {
            reels,
            is_spinning: false,
            spin_button_enabled: true,
        }
    }

    /// Creates a state from reels, deriving both flags from their phases.
    pub fn from_reels(reels: Vec<ReelData>) -> Self {
        let is_spinning = reels.iter().any(|reel| reel.phase.is_moving());
        Self {
            reels,
            is_spinning,
            spin_button_enabled: !is_spinning,
        }
    }

    /// Returns true when the spin flags agree with each other and with the
    /// reel phases.
    pub fn is_consistent(&self) -> bool {
        let any_moving = self.reels.iter().any(|reel| reel.phase.is_moving());
        self.spin_button_enabled == !self.is_spinning && self.is_spinning == any_moving
    }

    /// Indices of reels whose phase or offset differs from `previous`.
    ///
    /// Reels missing from `previous` are reported as changed.
    pub fn changed_reels<'a>(
        &'a self,
        previous: &'a GameState,
    ) -> impl Iterator<Item = usize> + 'a {
        self.reels
            .iter()
            .enumerate()
            .filter(move |(index, reel)| match previous.reels.get(*index) {
                Some(before) => {
                    before.phase != reel.phase || before.current_offset != reel.current_offset
                }
                None => true,
            })
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn initialize_builds_idle_reels() {
        let config = GameConfig::default();
        let mut rng = PcgRng::seeded(1);
        let state = GameState::initialize(&config, &mut rng);

        assert_eq!(state.reels.len(), config.reels.count);
        assert!(!state.is_spinning);
        assert!(state.spin_button_enabled);
        assert!(state.is_consistent());

        for (index, reel) in state.reels.iter().enumerate() {
            assert_eq!(reel.id, index);
            assert_eq!(reel.phase, ReelPhase::Idle);
            assert_eq!(reel.current_offset, 0.0);
            assert_eq!(reel.target_offset, 0.0);
            assert_eq!(reel.spin_duration, 0.0);
            assert_eq!(reel.start_time, 0.0);
            assert_eq!(reel.symbols.len(), config.reels.visible_symbols + 2);
            for (slot, tile) in reel.symbols.iter().enumerate() {
                assert_eq!(tile.y, slot as f64 * config.symbol_height());
                assert!(config.symbols.contains(&tile.symbol));
            }
        }
    }

    #[test]
    fn from_reels_derives_flags() {
        let config = GameConfig::default();
        let mut rng = PcgRng::seeded(2);
        let mut reels = GameState::initialize(&config, &mut rng).reels;

        let idle = GameState::from_reels(reels.clone());
        assert!(!idle.is_spinning);
        assert!(idle.spin_button_enabled);

        reels[3].phase = ReelPhase::Stopping;
        let moving = GameState::from_reels(reels);
        assert!(moving.is_spinning);
        assert!(!moving.spin_button_enabled);
        assert!(moving.is_consistent());
    }

    #[test]
    fn inconsistent_flags_are_detected() {
        let config = GameConfig::default();
        let mut rng = PcgRng::seeded(3);
        let mut state = GameState::initialize(&config, &mut rng);
        state.spin_button_enabled = false;
        assert!(!state.is_consistent());
    }

    #[test]
    fn changed_reels_reports_phase_and_offset_changes() {
        let config = GameConfig::default();
        let mut rng = PcgRng::seeded(4);
        let before = GameState::initialize(&config, &mut rng);

        let mut after = before.clone();
        assert_eq!(after.changed_reels(&before).count(), 0);

        after.reels[1].phase = ReelPhase::Spinning;
        after.reels[4].current_offset = 12.5;
        after.reels[2].target_offset = 90.0;

        let changed: Vec<usize> = after.changed_reels(&before).collect();
        assert_eq!(changed, vec![1, 4]);
    }

    #[test]
    fn phase_string_forms() {
        assert_eq!(ReelPhase::Idle.as_str(), "idle");
        assert_eq!(ReelPhase::Stopping.to_string(), "stopping");
        assert!(ReelPhase::Spinning.is_moving());
    }
}
