//! Terminal minesweeper runner.
//!
//! Pumps crossterm events into the game queue and runs one render tick per
//! interval. The 800x800 surface is presented with half-block glyphs.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_minesweeper::config::GameConfig;
use tui_minesweeper::core::GameState;
use tui_minesweeper::engine::{PixelFrame, RenderLoop};
use tui_minesweeper::input::{map_event, should_quit};
use tui_minesweeper::logging;
use tui_minesweeper::term::{
    FrameBuffer, RenderThrottle, StatusView, SurfaceView, TerminalRenderer, Viewport,
};
use tui_minesweeper::types::WINDOW_SIZE;

/// Present a settled board at least this often.
const STATIC_FRAME_MS: u64 = 250;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, tool = config.tool.as_str(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.set_tool(config.tool);
    info!(mines = game.board().mine_count(), "board ready");

    let mut looper = RenderLoop::for_game(&game);
    let mut frame = PixelFrame::new(WINDOW_SIZE, WINDOW_SIZE);
    let view = SurfaceView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_FRAME_MS);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut layout = view.layout(viewport, WINDOW_SIZE as u32);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(());
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    layout = view.layout(viewport, WINDOW_SIZE as u32);
                    term.invalidate();
                    throttle.reset();
                }
                ev => {
                    for game_event in map_event(&ev, &layout) {
                        game.push_event(game_event);
                    }
                }
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        let summary = looper.tick(&mut game, &mut frame);
        let now_ms = started.elapsed().as_millis() as u64;
        let is_static = !summary.animating && summary.events == 0;
        if throttle.should_render(now_ms, game.fingerprint(), is_static) {
            let status = StatusView {
                tool: game.tool(),
                game_over: summary.game_over,
            };
            layout = view.render_into(&frame, status, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
