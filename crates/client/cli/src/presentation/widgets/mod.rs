//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the [`BoardView`](crate::view_model::BoardView)
//! and renders into a terminal frame. Widgets never touch the engine.

pub mod footer;
pub mod header;
pub mod reels;
pub mod spin_button;
