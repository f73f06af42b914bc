//! Presentation-side session state.
//!
//! Wraps the [`GameController`] with everything only the screen cares about:
//! the frame counter, the pointer highlight and the explosion sequence.

use std::time::Duration;

use crossterm::event::Event;
use ratatui::layout::Rect;
use tracing::debug;

use crate::game::{Coord, GameCommand, GameController, GameStatus};
use crate::input::{map_event, InputAction};
use crate::ui::explosion::ExplosionSequence;
use crate::ui::geometry::BoardGeometry;

#[derive(Debug)]
pub struct App {
    game: GameController,
    frame: u64,
    hover: Option<Coord>,
    explosion: Option<ExplosionSequence>,
    /// Game number the frame counter and explosion belong to.
    seen_game: u64,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(game: GameController) -> Self {
        let seen_game = game.game_number();
        Self {
            game,
            frame: 0,
            hover: None,
            explosion: None,
            seen_game,
            notice: None,
            should_quit: false,
        }
    }

    /// One-line message shown in the status bar until the first move.
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    /// Apply a terminal event. `area` is the full terminal size.
    pub fn handle_event(&mut self, event: &Event, area: Rect) {
        let board = self.game.board();
        let geometry = BoardGeometry::compute(area, board.width(), board.height());

        if let Some(action) = map_event(event, geometry.as_ref()) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Command(command) => {
                self.notice = None;
                if self.game.handle(command) {
                    debug!(?command, status = ?self.game.status(), "command applied");
                }
                self.sync();
            }
            InputAction::Hover(cell) => self.hover = cell,
            InputAction::MoveCursor { dx, dy } => self.move_cursor(dx, dy),
            InputAction::RevealAtCursor => {
                if let Some((col, row)) = self.hover {
                    self.apply(InputAction::Command(GameCommand::Reveal { col, row }));
                }
            }
            InputAction::FlagAtCursor => {
                if let Some((col, row)) = self.hover {
                    self.apply(InputAction::Command(GameCommand::ToggleFlag { col, row }));
                }
            }
            InputAction::Quit => self.should_quit = true,
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let board = self.game.board();
        let (col, row) = match self.hover {
            Some(coord) => coord,
            None => {
                // first key press lands in the middle of the board
                self.hover = Some((board.width() / 2, board.height() / 2));
                return;
            }
        };
        let col = col.saturating_add_signed(dx).min(board.width() - 1);
        let row = row.saturating_add_signed(dy).min(board.height() - 1);
        self.hover = Some((col, row));
    }

    /// Advance one frame: run the clock and the explosion schedule.
    pub fn on_frame(&mut self, delta: Duration) {
        self.advance_clock(delta);
        self.frame += 1;
    }

    /// Run the game clock without stepping the frame counter. Called with the
    /// partial frame before an event so a finishing click is timed exactly.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.game.tick(delta);
        self.sync();
    }

    /// Restart the frame counter on a new game and start the explosion on
    /// the first frame that sees a loss.
    fn sync(&mut self) {
        if self.game.game_number() != self.seen_game {
            self.seen_game = self.game.game_number();
            self.frame = 0;
            self.explosion = None;
        }

        if self.game.status() == GameStatus::Lost && self.explosion.is_none() {
            self.explosion = Some(ExplosionSequence::new(self.frame, self.game.detonations()));
        }
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn hover(&self) -> Option<Coord> {
        self.hover
    }

    pub fn explosion(&self) -> Option<&ExplosionSequence> {
        self.explosion.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
