//! Reel state machine and timing model shared by slot frontends.
//!
//! `slot-core` defines the canonical data model (config, reels, game state)
//! and the pure transitions that move reels through
//! `Idle → Spinning → Stopping → Idle`. All state mutation flows through
//! [`engine::GameEngine`], which notifies registered observers with a
//! read-only snapshot after every change. Randomness and time are injected
//! through the oracles in [`env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::{ConfigError, GameConfig, LayoutConfig, ReelsConfig, Symbol};
pub use engine::{GameEngine, ObserverId, SpinParams, StateObserver};
pub use env::{Clock, FrameClock, FrameEnv, PcgRng, RngOracle, SpinEnv, SystemClock};
pub use error::{ErrorSeverity, GameError};
pub use state::{GameState, ReelData, ReelPhase, ReelSymbol};
