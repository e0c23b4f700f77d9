//! Mapping from terminal events to game events.

use arrayvec::ArrayVec;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{GameEvent, PointerButton, SurfaceLayout, Tool};

/// Game events produced by one terminal event.
pub type Mapped = ArrayVec<GameEvent, 2>;

/// Map any terminal event to game events.
///
/// Key presses that quit are not mapped here; check [`should_quit`] first.
pub fn map_event(event: &Event, layout: &SurfaceLayout) -> Mapped {
    let mut out = Mapped::new();
    match event {
        Event::Mouse(mouse) => map_mouse(*mouse, layout, &mut out),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if let Some(ev) = handle_key_event(*key) {
                out.push(ev);
            }
        }
        _ => {}
    }
    out
}

fn map_mouse(mouse: MouseEvent, layout: &SurfaceLayout, out: &mut Mapped) {
    let (x, y) = layout.to_surface(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            out.push(GameEvent::PointerMove { x, y });
        }
        MouseEventKind::Down(MouseButton::Left) => {
            // A press also tells us where the pointer is.
            out.push(GameEvent::PointerMove { x, y });
            out.push(GameEvent::PointerDown {
                button: PointerButton::Primary,
            });
        }
        MouseEventKind::Down(MouseButton::Right) => out.push(GameEvent::PointerDown {
            button: PointerButton::Secondary,
        }),
        MouseEventKind::Down(MouseButton::Middle) => out.push(GameEvent::PointerDown {
            button: PointerButton::Middle,
        }),
        _ => {}
    }
}

/// Map keyboard input to game events.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    match key.code {
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('1') => {
            Some(GameEvent::SelectTool(Tool::Flag))
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('2') => {
            Some(GameEvent::SelectTool(Tool::Reveal))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn layout() -> SurfaceLayout {
        // 80 samples wide: 10 surface pixels per column, 20 per row.
        SurfaceLayout::fit(80, 41, 1, 800)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_tool_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(GameEvent::SelectTool(Tool::Flag))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(GameEvent::SelectTool(Tool::Reveal))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn mouse_move_maps_to_surface_pixels() {
        let out = map_event(&mouse(MouseEventKind::Moved, 3, 2), &layout());
        assert_eq!(out.as_slice(), &[GameEvent::PointerMove { x: 35, y: 50 }]);
    }

    #[test]
    fn left_press_moves_then_clicks() {
        let out = map_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 0, 0),
            &layout(),
        );
        assert_eq!(
            out.as_slice(),
            &[
                GameEvent::PointerMove { x: 5, y: 10 },
                GameEvent::PointerDown {
                    button: PointerButton::Primary
                },
            ]
        );
    }

    #[test]
    fn other_mouse_events() {
        let right = map_event(
            &mouse(MouseEventKind::Down(MouseButton::Right), 1, 1),
            &layout(),
        );
        assert_eq!(
            right.as_slice(),
            &[GameEvent::PointerDown {
                button: PointerButton::Secondary
            }]
        );
        assert!(map_event(&mouse(MouseEventKind::ScrollUp, 1, 1), &layout()).is_empty());
        assert!(map_event(
            &mouse(MouseEventKind::Up(MouseButton::Left), 1, 1),
            &layout()
        )
        .is_empty());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert!(map_event(&Event::Key(key), &layout()).is_empty());
        assert!(map_event(&Event::FocusGained, &layout()).is_empty());
    }
}
