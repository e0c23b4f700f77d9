//! Sprite module - rounded-square cell masks
//!
//! Each mask is a `width x width` square of 0/255 bytes. The visible area is
//! bounded by a superellipse `x^4 + y^4 < (width/2 - inset)^4`, mirrored into
//! the four quadrants, and the outermost pixel ring is always cleared so
//! neighbouring cells never touch.
//!
//! The set is the animation axis of a cell: the render loop picks the mask at
//! the cell's animation level.

/// Superellipse exponent.
const ROUNDNESS: u32 = 4;

/// Pixel value of a lit mask pixel.
pub const SPRITE_ON: u8 = 255;

/// A single square mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: usize,
    pixels: Vec<u8>,
}

impl Sprite {
    /// Draw the mask for one inset amount.
    pub fn rounded(width: usize, inset: usize) -> Self {
        let half = width / 2;
        let mut full = vec![SPRITE_ON; width * width];

        let radius = (half as i64 - inset as i64).pow(ROUNDNESS);
        for x in 0..half {
            for y in 0..half {
                let r = (x as i64).pow(ROUNDNESS) + (y as i64).pow(ROUNDNESS);
                if r < radius {
                    continue;
                }
                for (row, col) in [
                    (half + x, half + y),
                    (half + x, half - y),
                    (half - x, half + y),
                    (half - x, half - y),
                ] {
                    full[row * width + col] = 0;
                }
            }
        }

        // Copy everything except the outer ring.
        let mut pixels = vec![0u8; width * width];
        for row in 1..width.saturating_sub(1) {
            let span = row * width + 1..(row + 1) * width - 1;
            pixels[span.clone()].copy_from_slice(&full[span]);
        }

        Self { width, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of the mask.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    /// Pixel value, 0 when out of range.
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        if row >= self.width || col >= self.width {
            return 0;
        }
        self.pixels[row * self.width + col]
    }

    /// Number of lit pixels.
    pub fn lit(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == SPRITE_ON).count()
    }
}

/// Ordered masks, one per animation level.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    sprites: Vec<Sprite>,
}

impl SpriteSet {
    /// Generate `levels` masks of side `width`.
    ///
    /// Level `i` is drawn with inset `i + 1`: the insets are produced from
    /// `levels` down to 1 and then reversed.
    pub fn generate(width: usize, levels: usize) -> Self {
        let mut sprites: Vec<Sprite> = (1..=levels)
            .rev()
            .map(|inset| Sprite::rounded(width, inset))
            .collect();
        sprites.reverse();
        Self { sprites }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Mask for an animation level, clamped to the last mask.
    pub fn get(&self, level: usize) -> Option<&Sprite> {
        let last = self.sprites.len().checked_sub(1)?;
        self.sprites.get(level.min(last))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }
}
