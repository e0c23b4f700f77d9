use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_minesweeper::core::{Board, GameState, SimpleRng, SpriteSet};
use tui_minesweeper::engine::{PixelFrame, RenderLoop};
use tui_minesweeper::term::{FrameBuffer, StatusView, SurfaceView, Viewport};
use tui_minesweeper::types::{
    GameEvent, PointerButton, Tool, BOARD_SIZE, FIELD_WIDTH, WINDOW_SIZE,
};

fn bench_board_setup(c: &mut Criterion) {
    c.bench_function("board_setup_15x15", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(black_box(42));
            Board::setup(BOARD_SIZE, &mut rng)
        })
    });
}

fn bench_sprite_generation(c: &mut Criterion) {
    c.bench_function("sprite_set_53", |b| {
        b.iter(|| SpriteSet::generate(black_box(FIELD_WIDTH), FIELD_WIDTH))
    });
}

fn bench_render_tick(c: &mut Criterion) {
    let mut game = GameState::new(42);
    let mut looper = RenderLoop::for_game(&game);
    let mut frame = PixelFrame::new(WINDOW_SIZE, WINDOW_SIZE);
    let mut x = 0;

    c.bench_function("render_tick_with_hover", |b| {
        b.iter(|| {
            x = (x + 7) % WINDOW_SIZE as i32;
            game.push_event(GameEvent::PointerMove { x, y: x });
            looper.tick(&mut game, &mut frame)
        })
    });
}

fn bench_step_animation(c: &mut Criterion) {
    let mut game = GameState::new(42);
    game.apply_event(GameEvent::SelectTool(Tool::Reveal));
    for i in 0..BOARD_SIZE as i32 {
        let p = i * FIELD_WIDTH as i32 + 1;
        game.apply_event(GameEvent::PointerMove { x: p, y: p });
        game.apply_event(GameEvent::PointerDown {
            button: PointerButton::Primary,
        });
    }

    c.bench_function("step_animation", |b| b.iter(|| game.step_animation()));
}

fn bench_surface_view(c: &mut Criterion) {
    let mut game = GameState::new(42);
    let mut looper = RenderLoop::for_game(&game);
    let mut frame = PixelFrame::new(WINDOW_SIZE, WINDOW_SIZE);
    looper.tick(&mut game, &mut frame);

    let view = SurfaceView::new();
    let viewport = Viewport::new(120, 50);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let status = StatusView {
        tool: Tool::Flag,
        game_over: false,
    };

    c.bench_function("surface_view_120x50", |b| {
        b.iter(|| view.render_into(black_box(&frame), status, viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_board_setup,
    bench_sprite_generation,
    bench_render_tick,
    bench_step_animation,
    bench_surface_view
);
criterion_main!(benches);
