//! A single board position.

/// Board coordinate as `(col, row)`.
pub type Coord = (usize, usize);

/// One position on the minefield.
///
/// Mutators are only reachable through `&mut Cell`, and the [`Board`](super::Board)
/// never hands one out, so outside code sees cells read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    col: usize,
    row: usize,
    has_mine: bool,
    revealed: bool,
    flagged: bool,
    /// Number of adjacent mines (0-8). Meaningless on a mine.
    adjacent_mines: u8,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            has_mine: false,
            revealed: false,
            flagged: false,
            adjacent_mines: 0,
        }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn coord(&self) -> Coord {
        (self.col, self.row)
    }

    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Arm this cell. Only meaningful during board setup.
    pub fn place_mine(&mut self) {
        self.has_mine = true;
    }

    /// Record the neighbour mine count. Ignored on mined cells.
    pub fn set_adjacent_mines(&mut self, count: u8) {
        debug_assert!(count <= 8, "a cell has at most 8 neighbours");
        if self.has_mine {
            return;
        }
        self.adjacent_mines = count.min(8);
    }

    /// Open the cell. Revealing twice is a no-op.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Flip the flag and report whether anything changed.
    ///
    /// A revealed cell can never gain a flag. It can lose one, which only
    /// happens when flood fill opened a cell the player had flagged.
    pub fn toggle_flag(&mut self) -> bool {
        if self.revealed && !self.flagged {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }
}
