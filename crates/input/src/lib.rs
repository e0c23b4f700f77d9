//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse and key events into [`crate::types::GameEvent`]s, using a
//! [`crate::types::SurfaceLayout`] to turn terminal cells into surface pixels.

pub mod map;

pub use tui_minesweeper_types as types;

pub use map::{handle_key_event, map_event, should_quit, Mapped};
