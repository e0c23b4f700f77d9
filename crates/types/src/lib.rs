//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, pixel compositing, terminal presentation).
//!
//! # Board Dimensions
//!
//! - **Board**: 15x15 cells, indexed `(row, col)` with row 0 at the top
//! - **Surface**: 800x800 pixels, 3 colour planes, 8 bits per channel
//! - **Field width**: `WINDOW_SIZE / BOARD_SIZE` = 53 pixels per cell
//!
//! # Generation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RANDOM_RANGE` | 100 | Every random draw is uniform in `[0, 100)` |
//! | `MINE_CHANCE` | 10 | A draw below this places a mine |
//! | `MINE_FREE_BORDER` | 2 | Outer rings that never hold a mine |
//! | `DECOY_THRESHOLD` | 70 | Accumulated neighbour signal above this marks a decoy |
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{CellPos, Mark, Tool, BOARD_SIZE, FIELD_WIDTH};
//!
//! assert_eq!(BOARD_SIZE, 15);
//! assert_eq!(FIELD_WIDTH, 53);
//!
//! // Tools apply their own mark.
//! assert_eq!(Tool::Flag.mark(), Mark::Flagged);
//! assert_eq!(Tool::from_str("reveal"), Some(Tool::Reveal));
//!
//! // Marks select a colour plane.
//! assert_eq!(Mark::Revealed.channel(), 2);
//!
//! let pos = CellPos::new(3, 4);
//! assert_eq!(pos.index(BOARD_SIZE), 3 * 15 + 4);
//! ```

/// Board side length in cells.
pub const BOARD_SIZE: usize = 15;

/// Side length of the square presentation surface in pixels.
pub const WINDOW_SIZE: usize = 800;

/// Pixel side length of one cell on the default board.
pub const FIELD_WIDTH: usize = WINDOW_SIZE / BOARD_SIZE;

/// Exclusive upper bound of every random draw.
pub const RANDOM_RANGE: u32 = 100;

/// Placement draws below this value become mines.
pub const MINE_CHANCE: u32 = 10;

/// Number of outer rings kept free of mines.
pub const MINE_FREE_BORDER: usize = 2;

/// Decoy accumulators strictly above this value mark a decoy.
pub const DECOY_THRESHOLD: u32 = 70;

/// Frame pump interval in milliseconds.
pub const TICK_MS: u32 = 25;

/// Animation step while a marked cell opens or an unmarked one closes.
pub const ANIM_FAST_STEP: u8 = 4;

/// Highest level reached by the hover lift.
pub const HOVER_LIFT: u8 = 4;

/// Distance from the last sprite at which the opening animation stops.
pub const OPEN_MARGIN: u8 = 5;

/// A board coordinate. Rows run top to bottom, columns left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index on a board of side `size`.
    #[inline(always)]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`CellPos::index`].
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

/// Per-cell user state.
///
/// The numeric codes match the tool values: a flag tool writes `1`, a reveal
/// tool writes `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Unmarked,
    Flagged,
    Revealed,
}

impl Mark {
    pub fn code(self) -> u8 {
        match self {
            Mark::Unmarked => 0,
            Mark::Flagged => 1,
            Mark::Revealed => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Mark::Unmarked),
            1 => Some(Mark::Flagged),
            2 => Some(Mark::Revealed),
            _ => None,
        }
    }

    /// Colour plane receiving this cell's sprite.
    ///
    /// Planes are ordered blue, green, red, so unmarked cells draw blue,
    /// flagged cells green and revealed cells red.
    pub fn channel(self) -> usize {
        self.code() as usize
    }

    pub fn is_marked(self) -> bool {
        self != Mark::Unmarked
    }
}

/// The action applied by a primary click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Flag,
    Reveal,
}

impl Tool {
    /// Mark written into an unmarked cell.
    pub fn mark(self) -> Mark {
        match self {
            Tool::Flag => Mark::Flagged,
            Tool::Reveal => Mark::Revealed,
        }
    }

    /// Parse a tool name (case-insensitive).
    ///
    /// Accepts `flag` | `f` | `1` and `reveal` | `r` | `step` | `2`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flag" | "f" | "1" => Some(Tool::Flag),
            "reveal" | "r" | "step" | "2" => Some(Tool::Reveal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Flag => "flag",
            Tool::Reveal => "reveal",
        }
    }
}

/// Pointer buttons reported by the windowing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Events consumed by the game state, in delivery order.
///
/// Pointer coordinates are surface pixels and may fall outside the surface;
/// the consumer clamps them to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Pointer moved to `(x, y)`.
    PointerMove { x: i32, y: i32 },
    /// Button pressed at the last known pointer position.
    PointerDown { button: PointerButton },
    /// Switch the active tool.
    SelectTool(Tool),
}

/// Placement of the square surface inside a grid of terminal cells.
///
/// The surface is shown with half-block glyphs, so one terminal cell covers
/// one horizontal sample and two vertical samples. `side` is the number of
/// samples along either axis (always even).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub origin_col: u16,
    pub origin_row: u16,
    pub side: u16,
    pub surface: u32,
}

impl SurfaceLayout {
    /// Fit a `surface`-pixel square into `cols` x `rows` terminal cells,
    /// keeping `reserved_rows` free at the bottom for a status line.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_minesweeper_types::SurfaceLayout;
    ///
    /// let layout = SurfaceLayout::fit(100, 41, 1, 800);
    /// assert_eq!(layout.side, 80);
    /// assert_eq!(layout.origin_col, 10);
    /// assert_eq!(layout.origin_row, 0);
    /// ```
    pub fn fit(cols: u16, rows: u16, reserved_rows: u16, surface: u32) -> Self {
        let usable_rows = rows.saturating_sub(reserved_rows);
        let side = cols.min(usable_rows.saturating_mul(2)).max(2) & !1;
        let term_rows = side / 2;
        Self {
            origin_col: cols.saturating_sub(side) / 2,
            origin_row: usable_rows.saturating_sub(term_rows) / 2,
            side,
            surface,
        }
    }

    /// Terminal rows covered by the surface.
    pub fn rows(&self) -> u16 {
        self.side / 2
    }

    /// Terminal columns covered by the surface.
    pub fn cols(&self) -> u16 {
        self.side
    }

    /// Surface pixel at the centre of sample `i` along either axis.
    pub fn sample_to_surface(&self, i: u16) -> u32 {
        ((2 * i as u32 + 1) * self.surface) / (2 * self.side.max(1) as u32)
    }

    /// Surface pixel under the centre of terminal cell `(col, row)`.
    ///
    /// Cells left of or above the surface map to negative coordinates; the
    /// game clamps those onto the board edge.
    pub fn to_surface(&self, col: u16, row: u16) -> (i32, i32) {
        let side = self.side.max(1) as i64;
        let surface = self.surface as i64;
        let dx = col as i64 - self.origin_col as i64;
        // Centre of a terminal row is the boundary between its two samples.
        let dy = row as i64 - self.origin_row as i64;
        let x = (2 * dx + 1) * surface / (2 * side);
        let y = (2 * dy + 1) * surface / side;
        (x as i32, y as i32)
    }

    /// Terminal cell showing surface pixel `(x, y)`, if it lies on the surface.
    pub fn to_terminal(&self, x: u32, y: u32) -> Option<(u16, u16)> {
        if x >= self.surface || y >= self.surface {
            return None;
        }
        let side = self.side as u32;
        let col = (x * side / self.surface) as u16;
        let row = (y * side / self.surface / 2) as u16;
        Some((self.origin_col + col, self.origin_row + row))
    }
}
