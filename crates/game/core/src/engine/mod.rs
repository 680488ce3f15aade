//! Spin scheduling and per-frame reel updates.
//!
//! The [`GameEngine`] is the authoritative owner of [`GameState`]. Every
//! mutating call builds a brand-new state from pure per-reel transitions,
//! swaps it in, and notifies observers synchronously before returning.

mod observer;
pub mod transition;

pub use observer::{ObserverId, ObserverRegistry, StateObserver};
pub use transition::{STOPPING_PROGRESS, SpinParams};

use crate::config::{ConfigError, GameConfig};
use crate::env::{Clock, FrameClock, PcgRng, RngOracle, SpinEnv};
use crate::state::GameState;

/// State controller for the reels.
///
/// # Lifecycle
///
/// 1. [`GameEngine::new`] validates the config and builds idle reels
/// 2. [`GameEngine::request_spin`] puts every reel in motion
/// 3. [`GameEngine::advance`] is called once per frame until all reels are idle
pub struct GameEngine<R = PcgRng, C = FrameClock>
where
    R: RngOracle,
    C: Clock,
{
    config: GameConfig,
    state: GameState,
    env: SpinEnv<R, C>,
    observers: ObserverRegistry,
}

impl<R, C> GameEngine<R, C>
where
    R: RngOracle,
    C: Clock,
{
    /// Creates an engine with freshly initialized reels.
    ///
    /// Fails fast if the configuration violates any invariant.
    pub fn new(config: GameConfig, mut env: SpinEnv<R, C>) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::initialize(&config, &mut env.rng);

        tracing::debug!(
            reels = config.reels.count,
            visible = config.reels.visible_symbols,
            palette = config.symbols.len(),
            "slot engine initialized"
        );

        Ok(Self {
            config,
            state,
            env,
            observers: ObserverRegistry::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current state, read-only.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn clock(&self) -> &C {
        &self.env.clock
    }

    /// Registers an observer notified after every state change.
    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: StateObserver + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Starts a spin on every reel.
    ///
    /// Ignored while a spin is in progress. Each reel draws its own duration
    /// and target offset. Returns true when a spin was started.
    pub fn request_spin(&mut self) -> bool {
        if self.state.is_spinning {
            tracing::trace!("spin requested while reels are moving; ignored");
            return false;
        }

        let now_ms = self.env.clock.now_ms();
        let reels = self
            .state
            .reels
            .iter()
            .map(|reel| {
                let params = SpinParams::draw(&self.config, &mut self.env.rng);
                tracing::debug!(
                    reel = reel.id,
                    duration_ms = params.duration_ms,
                    target = params.target_offset,
                    "reel spin started"
                );
                transition::begin_spin(reel, params, now_ms)
            })
            .collect();

        self.replace_state(GameState {
            reels,
            is_spinning: true,
            spin_button_enabled: false,
        });
        true
    }

    /// Advances all moving reels by one frame of `dt_seconds`.
    ///
    /// Does nothing, and emits nothing, when no spin is in progress.
    pub fn advance(&mut self, dt_seconds: f64) {
        let dt_seconds = if dt_seconds.is_finite() && dt_seconds >= 0.0 {
            dt_seconds
        } else {
            tracing::warn!(dt_seconds, "discarding invalid frame delta");
            0.0
        };

        self.env.clock.tick(dt_seconds);
        if !self.state.is_spinning {
            return;
        }

        let now_ms = self.env.clock.now_ms();
        let speed = self.config.reels.spin_speed;
        let reels = self
            .state
            .reels
            .iter()
            .map(|reel| {
                let next = transition::advance_reel(reel, now_ms, dt_seconds, speed);
                if reel.phase.is_moving() && next.phase.is_idle() {
                    tracing::debug!(reel = next.id, offset = next.current_offset, "reel stopped");
                }
                next
            })
            .collect();

        let next = GameState::from_reels(reels);
        tracing::trace!(now_ms, spinning = next.is_spinning, "frame advanced");
        if !next.is_spinning {
            tracing::debug!("all reels stopped");
        }
        self.replace_state(next);
    }

    fn replace_state(&mut self, next: GameState) {
        debug_assert!(next.is_consistent());
        self.state = next;
        self.observers.notify(&self.state);
    }
}

impl<R, C> core::fmt::Debug for GameEngine<R, C>
where
    R: RngOracle,
    C: Clock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FrameEnv;
    use crate::state::ReelPhase;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine(seed: u64) -> GameEngine {
        GameEngine::new(GameConfig::default(), FrameEnv::seeded(seed)).expect("valid config")
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = GameConfig::default();
        config.symbols.clear();
        let err = GameEngine::new(config, FrameEnv::seeded(0)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPalette);
    }

    #[test]
    fn advance_while_idle_emits_nothing() {
        let mut engine = engine(1);
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        engine.subscribe(move |_: &GameState| *counter.borrow_mut() += 1);

        let before = engine.snapshot();
        engine.advance(0.016);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn each_mutating_call_notifies_once() {
        let mut engine = engine(2);
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        engine.subscribe(move |_: &GameState| *counter.borrow_mut() += 1);

        assert!(engine.request_spin());
        assert_eq!(*calls.borrow(), 1);

        engine.advance(0.016);
        assert_eq!(*calls.borrow(), 2);

        assert!(!engine.request_spin());
        assert_eq!(*calls.borrow(), 2);

        // A zero-length frame changes nothing but still publishes while spinning.
        let before = engine.snapshot();
        engine.advance(0.0);
        assert_eq!(*calls.borrow(), 3);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn invalid_delta_is_treated_as_zero() {
        let mut engine = engine(3);
        engine.request_spin();
        let before = engine.snapshot();

        engine.advance(f64::NAN);
        engine.advance(-1.0);

        assert_eq!(engine.clock().now_ms(), 0.0);
        for (after, before) in engine.state().reels.iter().zip(&before.reels) {
            assert_eq!(after.current_offset, before.current_offset);
            assert_eq!(after.phase, ReelPhase::Spinning);
        }
    }

    #[test]
    fn snapshot_is_detached_from_engine() {
        let mut engine = engine(4);
        let mut snapshot = engine.snapshot();
        snapshot.reels[0].current_offset = 999.0;
        snapshot.is_spinning = true;

        assert_eq!(engine.state().reels[0].current_offset, 0.0);
        assert!(!engine.state().is_spinning);

        engine.request_spin();
        assert!(!engine.state().reels.is_empty());
    }
}
