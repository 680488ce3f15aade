//! Data-driven content definitions and loaders.
//!
//! This crate reads the slot machine configuration from TOML data files:
//! - Reel timing (count, visible rows, speed, spin duration range)
//! - Symbol palette (id, colour, label)
//! - Layout metrics (symbol size and spacing)
//!
//! Content is validated on load and consumed by the engine; it never appears
//! in game state except as the symbols drawn onto reel strips.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult};
