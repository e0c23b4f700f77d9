//! TUI Minesweeper (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_minesweeper::{core,engine,input,term,types}` and adds the runtime
//! configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_engine as engine;
pub use tui_minesweeper_input as input;
pub use tui_minesweeper_term as term;
pub use tui_minesweeper_types as types;

pub use config::GameConfig;
