//! Frame loop and pixel compositing.
//!
//! The engine owns the sprite set and turns a [`core::GameState`] into a
//! [`PixelFrame`] once per tick. It performs no I/O; presenting the frame is the
//! caller's job (see the `term` crate).
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::GameState;
//! use tui_minesweeper_engine::{PixelFrame, RenderLoop};
//! use tui_minesweeper_types::WINDOW_SIZE;
//!
//! let mut game = GameState::new(7);
//! let mut looper = RenderLoop::for_game(&game);
//! let mut frame = PixelFrame::new(WINDOW_SIZE, WINDOW_SIZE);
//!
//! let summary = looper.tick(&mut game, &mut frame);
//! assert!(!summary.game_over);
//! ```

pub mod font;
pub mod frame;
pub mod render;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_types as types;

pub use frame::{Bgr, PixelFrame, TextRun, CHANNELS};
pub use render::{FrameSummary, RenderLoop};
