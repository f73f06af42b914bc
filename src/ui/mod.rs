pub mod explosion;
pub mod game_common;
pub mod geometry;
pub mod minesweeper_scene;

use ratatui::Frame;

use crate::app::App;
use game_common::render_too_small;
use geometry::BoardGeometry;

/// Main UI drawing function
pub fn draw(frame: &mut Frame, app: &App) {
    let board = app.game().board();
    let (width, height) = (board.width(), board.height());

    match BoardGeometry::compute(frame.size(), width, height) {
        Some(geometry) => minesweeper_scene::render_minesweeper(frame, &geometry, app),
        None => {
            let need = BoardGeometry::required_size(width, height).unwrap_or((u16::MAX, u16::MAX));
            render_too_small(frame, need);
        }
    }
}
