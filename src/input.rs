//! Terminal events to player intent.
//!
//! Mouse presses map straight onto board cells through [`BoardGeometry`].
//! The keyboard drives the same highlight the mouse does, so the game can
//! also be played without a pointer.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::{Coord, GameCommand};
use crate::ui::geometry::BoardGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(GameCommand),
    /// Pointer moved; `None` when it left the grid.
    Hover(Option<Coord>),
    /// Move the highlight by whole cells.
    MoveCursor { dx: isize, dy: isize },
    RevealAtCursor,
    FlagAtCursor,
    Quit,
}

/// Translate one terminal event. `geometry` is `None` while the board is not
/// on screen, in which case mouse events are dropped.
pub fn map_event(event: &Event, geometry: Option<&BoardGeometry>) -> Option<InputAction> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, geometry?),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Command(GameCommand::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Up => InputAction::MoveCursor { dx: 0, dy: -1 },
        KeyCode::Down => InputAction::MoveCursor { dx: 0, dy: 1 },
        KeyCode::Left => InputAction::MoveCursor { dx: -1, dy: 0 },
        KeyCode::Right => InputAction::MoveCursor { dx: 1, dy: 0 },
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::RevealAtCursor,
        KeyCode::Char('f') | KeyCode::Char('F') => InputAction::FlagAtCursor,
        _ => return None,
    };
    Some(action)
}

fn map_mouse(mouse: &MouseEvent, geometry: &BoardGeometry) -> Option<InputAction> {
    let cell = geometry.cell_at(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (col, row) = cell?;
            Some(InputAction::Command(GameCommand::Reveal { col, row }))
        }
        MouseEventKind::Down(MouseButton::Right) => {
            let (col, row) = cell?;
            Some(InputAction::Command(GameCommand::ToggleFlag { col, row }))
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputAction::Hover(cell)),
        _ => None,
    }
}
