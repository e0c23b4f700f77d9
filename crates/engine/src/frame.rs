//! Pixel framebuffer.
//!
//! Three 8-bit colour planes per pixel, ordered blue, green, red, so a plane
//! index doubles as a [`Mark::channel`](crate::types::Mark::channel). Text draws
//! are also recorded as [`TextRun`]s; presenters that cannot show every pixel
//! use them to overlay legible glyphs.

use arrayvec::{ArrayString, ArrayVec};

use crate::core::Sprite;

/// Number of colour planes.
pub const CHANNELS: usize = 3;

/// Text runs kept per frame (one hint per cell plus the banner).
pub const MAX_TEXT_RUNS: usize = 256;

/// Pixel colour in plane order.
pub type Bgr = [u8; CHANNELS];

pub const BLACK: Bgr = [0, 0, 0];
pub const WHITE: Bgr = [255, 255, 255];
pub const RED: Bgr = [0, 0, 255];

/// A piece of text drawn into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun {
    pub text: ArrayString<16>,
    /// Top-left corner in pixels.
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Bgr,
}

impl TextRun {
    /// Centre of the run in pixels.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
    texts: ArrayVec<TextRun, MAX_TEXT_RUNS>,
}

impl PixelFrame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
            texts: ArrayVec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw interleaved plane data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * CHANNELS)
    }

    /// Reset every plane to black and forget recorded text.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.texts.clear();
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Bgr> {
        let i = self.idx(x, y)?;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Bgr) {
        if let Some(i) = self.idx(x, y) {
            self.data[i..i + CHANNELS].copy_from_slice(&color);
        }
    }

    /// Write `sprite` into one plane of the block whose top-left is `(x, y)`.
    ///
    /// Every mask pixel overwrites the plane, unlit ones included; the other
    /// planes are left alone. Parts outside the frame are clipped.
    pub fn blit_mask(&mut self, x: usize, y: usize, sprite: &Sprite, channel: usize) {
        if channel >= CHANNELS {
            return;
        }
        let w = sprite.width();
        for dy in 0..w {
            let py = y + dy;
            if py >= self.height {
                break;
            }
            let row = sprite.row(dy);
            for (dx, &value) in row.iter().enumerate() {
                let px = x + dx;
                if px >= self.width {
                    break;
                }
                let i = (py * self.width + px) * CHANNELS + channel;
                self.data[i] = value;
            }
        }
    }

    /// Record a text run. Returns false once the per-frame limit is reached.
    pub fn push_text(&mut self, run: TextRun) -> bool {
        self.texts.try_push(run).is_ok()
    }
}
