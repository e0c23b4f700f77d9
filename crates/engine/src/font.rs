//! Built-in 5x7 bitmap font.
//!
//! Covers the digits and the letters of the loss banner. Glyphs are drawn as
//! `scale x scale` pixel blocks with one blank column between characters.
//! Characters without a glyph (space included) advance without drawing.

use arrayvec::ArrayString;

use crate::frame::{Bgr, PixelFrame, TextRun};

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;

/// Horizontal distance between glyph origins, in unscaled pixels.
const ADVANCE: u32 = GLYPH_W + 1;

/// Rows of a glyph, most significant of the low 5 bits is the left column.
type Glyph = [u8; GLYPH_H as usize];

fn glyph(ch: char) -> Option<Glyph> {
    let rows = match ch.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        _ => return None,
    };
    Some(rows)
}

/// Pixel size of `text` at `scale`.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let n = text.chars().count() as u32;
    if n == 0 {
        return (0, 0);
    }
    ((n * ADVANCE - 1) * scale, GLYPH_H * scale)
}

/// Draw `text` with its top-left corner at `(x, y)` and record it on the frame.
///
/// Lit glyph pixels are set to `color` on all planes. Text longer than a
/// [`TextRun`] can hold is still drawn but recorded truncated.
pub fn draw_text(frame: &mut PixelFrame, x: u32, y: u32, text: &str, scale: u32, color: Bgr) {
    let scale = scale.max(1);
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let gx = x + i as u32 * ADVANCE * scale;
        for (ry, bits) in rows.iter().enumerate() {
            for rx in 0..GLYPH_W {
                if bits & (0x10 >> rx) == 0 {
                    continue;
                }
                let px = gx + rx * scale;
                let py = y + ry as u32 * scale;
                for sy in 0..scale {
                    for sx in 0..scale {
                        frame.set_pixel((px + sx) as usize, (py + sy) as usize, color);
                    }
                }
            }
        }
    }

    let mut stored = ArrayString::<16>::new();
    for ch in text.chars() {
        if stored.try_push(ch).is_err() {
            break;
        }
    }
    let (width, height) = text_size(text, scale);
    frame.push_text(TextRun {
        text: stored,
        x,
        y,
        width,
        height,
        color,
    });
}
