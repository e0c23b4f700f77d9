//! Terminal presentation for the minesweeper surface.
//!
//! The engine draws into an 800x800 [`engine::PixelFrame`]. This crate maps
//! that surface onto terminal cells (two samples per cell, one above the
//! other), overlays hint text, and flushes the result with crossterm.
//!
//! Goals:
//! - Keep `engine` free of terminal I/O
//! - Diff consecutive frames so only changed cells are written
//! - Share one [`types::SurfaceLayout`] between drawing and mouse mapping

pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod surface_view;

pub use tui_minesweeper_engine as engine;
pub use tui_minesweeper_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface_view::{StatusView, SurfaceView, Viewport, STATUS_ROWS};
