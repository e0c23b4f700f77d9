//! SurfaceView: presents a [`PixelFrame`] in a terminal framebuffer.
//!
//! Each terminal cell shows two vertically stacked samples of the surface
//! using the upper half block: the foreground is the top sample, the
//! background the bottom one. Hints are far smaller than a terminal cell at
//! this resolution, so recorded text runs are overlaid as characters on top
//! of the sampled pixels. The last row holds a status line.
//!
//! This module is pure (no I/O).

use crate::engine::{Bgr, PixelFrame, TextRun};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{SurfaceLayout, Tool};

/// Rows kept below the surface for the status line.
pub const STATUS_ROWS: u16 = 1;

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub tool: Tool,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceView;

impl SurfaceView {
    pub fn new() -> Self {
        Self
    }

    /// Where a `surface`-pixel square lands in `viewport`.
    pub fn layout(&self, viewport: Viewport, surface: u32) -> SurfaceLayout {
        SurfaceLayout::fit(viewport.width, viewport.height, STATUS_ROWS, surface)
    }

    /// Render `frame` into `fb`, resizing it to the viewport.
    ///
    /// Reuses `fb`'s allocation; nothing here allocates once `fb` has been
    /// sized for the viewport.
    pub fn render_into(
        &self,
        frame: &PixelFrame,
        status: StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> SurfaceLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport, frame.width().min(frame.height()) as u32);
        self.draw_samples(frame, &layout, fb);
        for run in frame.texts() {
            self.draw_text_run(run, &layout, fb);
        }
        self.draw_status(status, viewport, fb);
        layout
    }

    fn draw_samples(&self, frame: &PixelFrame, layout: &SurfaceLayout, fb: &mut FrameBuffer) {
        for row in 0..layout.rows() {
            let top = layout.sample_to_surface(2 * row) as usize;
            let bottom = layout.sample_to_surface(2 * row + 1) as usize;
            for col in 0..layout.cols() {
                let x = layout.sample_to_surface(col) as usize;
                let style = CellStyle {
                    fg: sample(frame, x, top),
                    bg: sample(frame, x, bottom),
                    bold: false,
                    dim: false,
                };
                fb.set(
                    layout.origin_col + col,
                    layout.origin_row + row,
                    style.cell(HALF_BLOCK),
                );
            }
        }
    }

    /// Write the run's text centred on the cell under the run's centre.
    fn draw_text_run(&self, run: &TextRun, layout: &SurfaceLayout, fb: &mut FrameBuffer) {
        let (cx, cy) = run.center();
        let Some((col, row)) = layout.to_terminal(cx, cy) else {
            return;
        };
        let len = run.text.chars().count() as u16;
        let x = col.saturating_sub(len / 2).max(layout.origin_col);
        let bg = fb.get(col, row).map(|c| c.style.bg).unwrap_or_default();
        let style = CellStyle {
            fg: Rgb::from_bgr(run.color),
            bg,
            bold: true,
            dim: false,
        };
        fb.put_str(x, row, &run.text, style);
    }

    fn draw_status(&self, status: StatusView, viewport: Viewport, fb: &mut FrameBuffer) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - STATUS_ROWS;
        let label = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            bold: true,
            ..CellStyle::default()
        };

        let mut x = fb.put_str(1, y, "TOOL ", label);
        x = fb.put_str(x, y, tool_label(status.tool), value);
        x = fb.put_str(x, y, "  [f] flag  [r] reveal  [q] quit", label);
        if status.game_over {
            let over = CellStyle {
                fg: Rgb::new(255, 60, 60),
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(x + 2, y, "GAME OVER", over);
        }
    }
}

fn tool_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Flag => "FLAG",
        Tool::Reveal => "REVEAL",
    }
}

fn sample(frame: &PixelFrame, x: usize, y: usize) -> Rgb {
    const OFF: Bgr = [0, 0, 0];
    Rgb::from_bgr(frame.pixel(x, y).unwrap_or(OFF))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::frame::WHITE;

    fn status() -> StatusView {
        StatusView {
            tool: Tool::Reveal,
            game_over: false,
        }
    }

    #[test]
    fn half_blocks_carry_top_and_bottom_samples() {
        let mut frame = PixelFrame::new(4, 4);
        // Top half red, bottom half blue.
        for y in 0..4 {
            for x in 0..4 {
                let px = if y < 2 { [0, 0, 255] } else { [255, 0, 0] };
                frame.set_pixel(x, y, px);
            }
        }
        let mut fb = FrameBuffer::new(1, 1);
        let layout = SurfaceView::new().render_into(&frame, status(), Viewport::new(4, 3), &mut fb);
        assert_eq!(layout.side, 4);

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.style.bg, Rgb::new(255, 0, 0));
        let lower = fb.get(0, 1).unwrap();
        assert_eq!(lower.style.fg, Rgb::new(0, 0, 255));
        assert_eq!(lower.style.bg, Rgb::new(0, 0, 255));
    }

    #[test]
    fn text_runs_are_overlaid_as_characters() {
        let mut frame = PixelFrame::new(800, 800);
        crate::engine::font::draw_text(&mut frame, 390, 390, "3", 3, WHITE);
        let mut fb = FrameBuffer::new(1, 1);
        let layout = SurfaceView::new().render_into(&frame, status(), Viewport::new(80, 41), &mut fb);

        let (cx, cy) = frame.texts()[0].center();
        let (col, row) = layout.to_terminal(cx, cy).unwrap();
        let cell = fb.get(col, row).unwrap();
        assert_eq!(cell.ch, '3');
        assert_eq!(cell.style.fg, Rgb::new(255, 255, 255));
    }

    #[test]
    fn status_line_names_tool_and_loss() {
        let frame = PixelFrame::new(8, 8);
        let mut fb = FrameBuffer::new(1, 1);
        let view = SurfaceView::new();
        view.render_into(&frame, status(), Viewport::new(60, 10), &mut fb);
        assert!(fb.row_text(9).contains("TOOL REVEAL"));
        assert!(!fb.row_text(9).contains("GAME OVER"));

        let lost = StatusView {
            tool: Tool::Flag,
            game_over: true,
        };
        view.render_into(&frame, lost, Viewport::new(60, 10), &mut fb);
        assert!(fb.row_text(9).contains("TOOL FLAG"));
        assert!(fb.row_text(9).contains("GAME OVER"));
    }
}
