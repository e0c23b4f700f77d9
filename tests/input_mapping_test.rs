//! Pointer and keyboard input from terminal events down to board cells.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_minesweeper::core::{EventOutcome, GameState};
use tui_minesweeper::input::map_event;
use tui_minesweeper::types::{
    CellPos, GameEvent, Mark, PointerButton, SurfaceLayout, Tool, BOARD_SIZE, WINDOW_SIZE,
};

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn deliver(game: &mut GameState, event: &Event, layout: &SurfaceLayout) {
    for ev in map_event(event, layout) {
        game.push_event(ev);
    }
    game.drain_events();
}

#[test]
fn surface_corners_map_to_board_corners() {
    let game = GameState::new(3);
    let last = WINDOW_SIZE as i32 - 1;
    assert_eq!(game.cell_at(0, 0), CellPos::new(0, 0));
    assert_eq!(game.cell_at(last, last), CellPos::new(14, 14));
    assert_eq!(game.cell_at(last, 0), CellPos::new(0, 14));
}

#[test]
fn rows_come_from_y_and_columns_from_x() {
    let game = GameState::new(3);
    let fw = game.field_width() as i32;
    assert_eq!(game.cell_at(3 * fw + 1, 5 * fw + 1), CellPos::new(5, 3));
}

#[test]
fn out_of_surface_coordinates_clamp() {
    let game = GameState::new(3);
    assert_eq!(game.cell_at(-40, -1), CellPos::new(0, 0));
    assert_eq!(game.cell_at(10_000, 10_000), CellPos::new(14, 14));
    // 795..800 lies past the last full cell but still maps to it.
    assert_eq!(game.cell_at(798, 2), CellPos::new(0, 14));
}

#[test]
fn pointer_move_sets_exactly_one_hover() {
    let mut game = GameState::new(3);
    let fw = game.field_width() as i32;
    for (x, y) in [(0, 0), (7 * fw, 2 * fw), (799, 799)] {
        let outcome = game.apply_event(GameEvent::PointerMove { x, y });
        let expected = game.cell_at(x, y);
        assert_eq!(outcome, EventOutcome::Focused(expected));
        assert_eq!(game.cells().iter().filter(|c| c.hover).count(), 1);
        assert_eq!(game.hovered(), Some(expected));
        assert_eq!(game.focus(), expected);
    }
}

#[test]
fn terminal_clicks_reach_the_cell_under_the_mouse() {
    let mut game = GameState::new(3);
    game.set_tool(Tool::Reveal);
    let layout = SurfaceLayout::fit(80, 41, 1, WINDOW_SIZE as u32);

    deliver(&mut game, &click(0, 0), &layout);
    assert_eq!(game.focus(), CellPos::new(0, 0));
    assert_eq!(game.cell(CellPos::new(0, 0)).unwrap().mark, Mark::Revealed);

    deliver(&mut game, &click(79, 39), &layout);
    let corner = CellPos::new(BOARD_SIZE - 1, BOARD_SIZE - 1);
    assert_eq!(game.focus(), corner);
    assert_eq!(game.cell(corner).unwrap().mark, Mark::Revealed);
}

#[test]
fn clicks_left_of_a_centred_surface_clamp_to_column_zero() {
    let mut game = GameState::new(3);
    // 120 columns: the 80-wide square starts at column 20.
    let layout = SurfaceLayout::fit(120, 41, 1, WINDOW_SIZE as u32);
    assert_eq!(layout.origin_col, 20);

    deliver(&mut game, &click(2, 10), &layout);
    assert_eq!(game.focus().col, 0);
    assert_eq!(game.cell(game.focus()).unwrap().mark, Mark::Flagged);
}

#[test]
fn flag_toggles_and_reveal_is_permanent() {
    let mut game = GameState::new(3);
    let target = GameEvent::PointerMove { x: 60, y: 60 };
    let press = GameEvent::PointerDown {
        button: PointerButton::Primary,
    };
    let pos = CellPos::new(1, 1);

    game.apply_event(target);
    game.apply_event(press);
    assert_eq!(game.cell(pos).unwrap().mark, Mark::Flagged);
    game.apply_event(press);
    assert_eq!(game.cell(pos).unwrap().mark, Mark::Unmarked);

    game.apply_event(GameEvent::SelectTool(Tool::Reveal));
    game.apply_event(press);
    assert_eq!(game.cell(pos).unwrap().mark, Mark::Revealed);
    assert_eq!(game.apply_event(press), EventOutcome::Ignored);
    assert_eq!(game.cell(pos).unwrap().mark, Mark::Revealed);
}

#[test]
fn secondary_buttons_do_nothing() {
    let mut game = GameState::new(3);
    game.apply_event(GameEvent::PointerMove { x: 60, y: 60 });
    for button in [PointerButton::Secondary, PointerButton::Middle] {
        assert_eq!(
            game.apply_event(GameEvent::PointerDown { button }),
            EventOutcome::Ignored
        );
    }
    assert!(game.cells().iter().all(|c| c.mark == Mark::Unmarked));
}

#[test]
fn tool_keys_switch_the_mark_applied() {
    let mut game = GameState::new(3);
    let layout = SurfaceLayout::fit(80, 41, 1, WINDOW_SIZE as u32);

    deliver(&mut game, &Event::Key(KeyEvent::from(KeyCode::Char('2'))), &layout);
    assert_eq!(game.tool(), Tool::Reveal);
    deliver(&mut game, &Event::Key(KeyEvent::from(KeyCode::Char('f'))), &layout);
    assert_eq!(game.tool(), Tool::Flag);
}

#[test]
fn queued_events_apply_in_order() {
    let mut game = GameState::new(3);
    let press = GameEvent::PointerDown {
        button: PointerButton::Primary,
    };
    game.push_event(GameEvent::PointerMove { x: 0, y: 0 });
    game.push_event(press);
    game.push_event(GameEvent::PointerMove { x: 799, y: 799 });
    game.push_event(press);
    assert_eq!(game.pending_events(), 4);
    assert_eq!(game.drain_events(), 4);
    assert_eq!(game.pending_events(), 0);

    assert_eq!(game.cell(CellPos::new(0, 0)).unwrap().mark, Mark::Flagged);
    assert_eq!(game.cell(CellPos::new(14, 14)).unwrap().mark, Mark::Flagged);
}
