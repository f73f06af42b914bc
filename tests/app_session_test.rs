//! Integration test: a terminal session
//!
//! Drives `App` with crossterm events and renders through ratatui's
//! `TestBackend`, the same path the binary takes.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use minesweeper::app::App;
use minesweeper::ui::{self, geometry::BoardGeometry};
use minesweeper::{Board, GameController, GameStatus};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn standard_app(mines: &[(usize, usize)]) -> App {
    App::new(GameController::from_board(
        Board::with_mines(27, 18, mines).unwrap(),
    ))
}

fn click(app: &mut App, button: MouseButton, col: usize, row: usize) {
    let geometry = BoardGeometry::compute(AREA, 27, 18).unwrap();
    let rect = geometry.cell_rect((col, row));
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(button),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
    app.handle_event(&event, AREA);
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), AREA);
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn cell_symbol(buffer: &Buffer, col: usize, row: usize) -> String {
    let geometry = BoardGeometry::compute(AREA, 27, 18).unwrap();
    let rect = geometry.cell_rect((col, row));
    buffer.get(rect.x, rect.y).symbol().to_string()
}

fn status_line(buffer: &Buffer) -> String {
    let geometry = BoardGeometry::compute(AREA, 27, 18).unwrap();
    (0..AREA.width)
        .map(|x| buffer.get(x, geometry.status_bar.y).symbol().to_string())
        .collect()
}

fn advance(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.on_frame(Duration::from_millis(1000 / 30));
    }
}

// =============================================================================
// Play Tests
// =============================================================================

#[test]
fn test_mouse_reveal_and_flag() {
    let mut app = standard_app(&[(26, 17), (0, 17)]);

    click(&mut app, MouseButton::Right, 5, 5);
    assert!(app.game().board().cell(5, 5).unwrap().is_flagged());
    assert_eq!(cell_symbol(&render(&app), 5, 5), "F");

    click(&mut app, MouseButton::Left, 10, 0);
    let board = app.game().board();
    assert!(board.cell(10, 0).unwrap().is_revealed());
    // flagged cell was opened by the flood but still carries its flag
    assert!(board.cell(5, 5).unwrap().is_revealed());
    assert_eq!(app.game().status(), GameStatus::Playing);

    click(&mut app, MouseButton::Right, 5, 5);
    assert_eq!(app.game().status(), GameStatus::Won);
    assert!(status_line(&render(&app)).contains("You win!"));
}

#[test]
fn test_timer_counts_while_playing() {
    let mut app = standard_app(&[(26, 17)]);
    advance(&mut app, 95);
    assert!(status_line(&render(&app)).contains("Time: 3"));
}

// =============================================================================
// Loss And Explosion Tests
// =============================================================================

#[test]
fn test_loss_staggers_explosions() {
    let mut app = standard_app(&[(0, 0), (1, 0), (20, 10)]);
    advance(&mut app, 10);

    click(&mut app, MouseButton::Left, 20, 10);
    assert_eq!(app.game().status(), GameStatus::Lost);
    assert!(status_line(&render(&app)).contains("You lost!"));

    // first mine is exploding, the last one is still waiting its turn
    let buffer = render(&app);
    assert_ne!(cell_symbol(&buffer, 0, 0), "#");
    assert_eq!(cell_symbol(&buffer, 20, 10), "#");

    // all three rest on the final image once the last animation ends
    advance(&mut app, 6 + 30);
    let buffer = render(&app);
    for (col, row) in [(0, 0), (1, 0), (20, 10)] {
        assert_eq!(cell_symbol(&buffer, col, row), "*");
    }

    // input other than restart is ignored
    click(&mut app, MouseButton::Left, 5, 5);
    assert!(!app.game().board().cell(5, 5).unwrap().is_revealed());
}

#[test]
fn test_flagged_mine_still_explodes_after_loss() {
    let mut app = standard_app(&[(0, 0), (5, 5)]);
    click(&mut app, MouseButton::Right, 0, 0);
    assert_eq!(cell_symbol(&render(&app), 0, 0), "F");

    click(&mut app, MouseButton::Left, 5, 5);
    assert_eq!(app.game().status(), GameStatus::Lost);

    // first in disclosure order, so it is mid-explosion right away
    let symbol = cell_symbol(&render(&app), 0, 0);
    assert_ne!(symbol, "F");
    assert_ne!(symbol, "#");

    advance(&mut app, 60);
    let buffer = render(&app);
    assert_eq!(cell_symbol(&buffer, 0, 0), "*");
    assert_eq!(cell_symbol(&buffer, 5, 5), "*");
}

#[test]
fn test_restart_key_starts_new_game() {
    let mut app = standard_app(&[(0, 0)]);
    advance(&mut app, 40);
    click(&mut app, MouseButton::Left, 0, 0);
    assert_eq!(app.game().status(), GameStatus::Lost);

    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.game().status(), GameStatus::Playing);
    assert_eq!(app.game().elapsed_seconds(), 0);
    assert!(app.explosion().is_none());
    assert_eq!(app.frame(), 0);
    let status = status_line(&render(&app));
    assert!(status.contains("Time: 0"), "status: {:?}", status);
}

#[test]
fn test_quit_key() {
    let mut app = standard_app(&[(0, 0)]);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
