//! Frame loop: input, animation, compositing.
//!
//! One [`RenderLoop::tick`] per frame:
//! 1. apply queued input events,
//! 2. step every cell's animation,
//! 3. clear the frame and composite sprites, hints and the loss banner.
//!
//! Sprites of mines and decoys go to the colour plane selected by the cell's
//! mark, so unmarked/flagged/revealed differ only in colour. The frame is
//! presented by the caller.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use tracing::{debug, info};

use crate::core::{GameState, SpriteSet};
use crate::font::{draw_text, text_size};
use crate::frame::{PixelFrame, RED, WHITE};
use crate::types::{CellPos, Mark};

/// Hint glyph scale (5x7 font -> 15x21 pixels).
pub const HINT_SCALE: u32 = 3;

pub const BANNER_TEXT: &str = "GAME OVER";
pub const BANNER_X: u32 = 50;
/// Baseline (bottom edge) of the banner text.
pub const BANNER_BASELINE: u32 = 300;
pub const BANNER_SCALE: u32 = 12;

/// What a tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSummary {
    /// Input events applied this tick.
    pub events: usize,
    /// Some cell changed animation level.
    pub animating: bool,
    /// The loss banner is on screen.
    pub game_over: bool,
}

pub struct RenderLoop {
    sprites: SpriteSet,
    showing_banner: bool,
}

impl RenderLoop {
    /// Build the sprite set for cells of `field_width` pixels.
    pub fn new(field_width: usize) -> Self {
        Self {
            sprites: SpriteSet::generate(field_width, field_width),
            showing_banner: false,
        }
    }

    pub fn for_game(game: &GameState) -> Self {
        Self::new(game.field_width())
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Run one frame.
    pub fn tick(&mut self, game: &mut GameState, frame: &mut PixelFrame) -> FrameSummary {
        let events = game.drain_events();
        if events > 0 {
            debug!(events, focus = ?game.focus(), tool = game.tool().as_str(), "applied input");
        }

        let animating = game.step_animation();
        let game_over = self.compose(game, frame);

        if game_over && !self.showing_banner {
            info!(focus = ?game.focus(), "mine revealed");
        }
        self.showing_banner = game_over;

        FrameSummary {
            events,
            animating,
            game_over,
        }
    }

    /// Draw the current state into `frame` without advancing anything.
    ///
    /// Returns true when the loss banner was drawn.
    pub fn compose(&self, game: &GameState, frame: &mut PixelFrame) -> bool {
        frame.clear();

        let board = game.board();
        let size = game.size();
        let fw = game.field_width();
        let mut lost = false;

        for (i, cell) in game.cells().iter().enumerate() {
            let pos = CellPos::from_index(i, size);
            let (x, y) = (pos.col * fw, pos.row * fw);

            if board.draws_sprite(pos) {
                if let Some(sprite) = self.sprites.get(cell.anim as usize) {
                    frame.blit_mask(x, y, sprite, cell.mark.channel());
                }
            } else {
                let hint = board.hint(pos);
                if hint > 0 {
                    draw_hint(frame, x + fw / 2, y + fw / 2, hint);
                }
            }

            if cell.mark == Mark::Revealed && board.is_mine(pos) {
                lost = true;
            }
        }

        if lost {
            let (_, h) = text_size(BANNER_TEXT, BANNER_SCALE);
            let top = BANNER_BASELINE.saturating_sub(h);
            draw_text(frame, BANNER_X, top, BANNER_TEXT, BANNER_SCALE, RED);
        }

        lost
    }
}

/// Draw a hint count centred on `(cx, cy)`.
fn draw_hint(frame: &mut PixelFrame, cx: usize, cy: usize, hint: u8) {
    let mut text = ArrayString::<4>::new();
    // A u8 always fits.
    let _ = write!(text, "{hint}");
    let (w, h) = text_size(&text, HINT_SCALE);
    let x = (cx as u32).saturating_sub(w / 2);
    let y = (cy as u32).saturating_sub(h / 2);
    draw_text(frame, x, y, &text, HINT_SCALE, WHITE);
}
