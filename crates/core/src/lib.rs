//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board model, the sprite masks and the per-cell
//! state machine driven by pointer input. It has **zero dependencies** on
//! terminals, windows or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same board (fixtures, benchmarks)
//! - **Testable**: Every rule is reachable without a display
//! - **Portable**: Can run headless or behind any frame pump
//!
//! # Module Structure
//!
//! - [`board`]: mines, hints and decoys generated from a random source
//! - [`game_state`]: per-cell mark/animation/hover state, tool, focus, event queue
//! - [`rng`]: the random source seam and a seeded LCG
//! - [`sprite`]: rounded-square masks used as the animation sequence
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::GameState;
//! use tui_minesweeper_types::{CellPos, GameEvent, Mark, PointerButton};
//!
//! let mut game = GameState::new(12345);
//!
//! // Point at the cell in row 2, column 1 and click it.
//! game.push_event(GameEvent::PointerMove { x: 60, y: 110 });
//! game.push_event(GameEvent::PointerDown { button: PointerButton::Primary });
//! game.drain_events();
//!
//! assert_eq!(game.cell(CellPos::new(2, 1)).unwrap().mark, Mark::Flagged);
//!
//! // Animation advances once per frame.
//! assert!(game.step_animation());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod sprite;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{CellState, EventOutcome, GameState};
pub use rng::{RandomSource, SimpleRng};
pub use sprite::{Sprite, SpriteSet, SPRITE_ON};
