//! Where the board sits on screen.
//!
//! Rendering and mouse translation both go through [`BoardGeometry`] so a
//! click always lands on the cell that was drawn under it.

use ratatui::layout::Rect;

use crate::constants::{CELL_COLS, CELL_ROWS, STATUS_BAR_ROWS};
use crate::game::Coord;

/// Screen rectangles for one frame.
///
/// ```text
/// ┌─ Minesweeper ──────────────┐
/// │ [status bar - 2 lines]     │
/// │ [grid]                     │
/// │                            │
/// └────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub outer: Rect,
    pub status_bar: Rect,
    pub grid: Rect,
    board_width: usize,
    board_height: usize,
}

impl BoardGeometry {
    /// Center a `board_width` x `board_height` board in `area`.
    ///
    /// Returns `None` when the terminal is too small to show all of it.
    pub fn compute(area: Rect, board_width: usize, board_height: usize) -> Option<Self> {
        let (outer_width, outer_height) = Self::required_size(board_width, board_height)?;
        if area.width < outer_width || area.height < outer_height {
            return None;
        }

        let outer = Rect::new(
            area.x + (area.width - outer_width) / 2,
            area.y + (area.height - outer_height) / 2,
            outer_width,
            outer_height,
        );
        let grid_width = outer_width - 2;
        let status_bar = Rect::new(outer.x + 1, outer.y + 1, grid_width, STATUS_BAR_ROWS);
        let grid = Rect::new(
            outer.x + 1,
            status_bar.y + STATUS_BAR_ROWS,
            grid_width,
            outer_height - 2 - STATUS_BAR_ROWS,
        );

        Some(Self {
            outer,
            status_bar,
            grid,
            board_width,
            board_height,
        })
    }

    /// Terminal columns and rows needed for the bordered board.
    pub fn required_size(board_width: usize, board_height: usize) -> Option<(u16, u16)> {
        let cols = u16::try_from(board_width).ok()?.checked_mul(CELL_COLS)?;
        let rows = u16::try_from(board_height).ok()?.checked_mul(CELL_ROWS)?;
        Some((cols.checked_add(2)?, rows.checked_add(2 + STATUS_BAR_ROWS)?))
    }

    /// Board cell under a terminal position, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if column < self.grid.x || row < self.grid.y {
            return None;
        }
        let col = usize::from((column - self.grid.x) / CELL_COLS);
        let row = usize::from((row - self.grid.y) / CELL_ROWS);
        (col < self.board_width && row < self.board_height).then_some((col, row))
    }

    /// Screen rectangle of one cell.
    pub fn cell_rect(&self, (col, row): Coord) -> Rect {
        Rect::new(
            self.grid.x + col as u16 * CELL_COLS,
            self.grid.y + row as u16 * CELL_ROWS,
            CELL_COLS,
            CELL_ROWS,
        )
    }
}
