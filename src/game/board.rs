//! Minefield grid: mine placement, adjacency counts, flood-fill reveal and
//! the win check.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cell::{Cell, Coord};
use super::error::{GameError, Result};

/// What a reveal did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was already open.
    Unchanged,
    /// Safe reveal; `cells` counts every cell opened by this call, flood fill included.
    Revealed { cells: usize },
    /// Target held a mine. Ending the game is the caller's job.
    Detonated,
}

/// What a flag toggle did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    Unchanged,
    Flagged,
    Unflagged,
}

/// Get valid neighbor coordinates for a cell.
///
/// Returns up to 8 `(col, row)` pairs, clipped at the board edges.
pub fn neighbors(col: usize, row: usize, width: usize, height: usize) -> Vec<Coord> {
    let mut result = Vec::with_capacity(8);

    for d_row in -1isize..=1 {
        for d_col in -1isize..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }

            let (Some(n_col), Some(n_row)) =
                (col.checked_add_signed(d_col), row.checked_add_signed(d_row))
            else {
                continue;
            };

            if n_col < width && n_row < height {
                result.push((n_col, n_row));
            }
        }
    }

    result
}

/// Checks dimensions and mine count, returning the total cell count.
fn validate_config(width: usize, height: usize, mines: usize) -> Result<usize> {
    let invalid = GameError::InvalidConfiguration {
        width,
        height,
        mines,
    };

    if width == 0 || height == 0 {
        return Err(invalid);
    }
    let total = width.checked_mul(height).ok_or(invalid)?;
    if mines >= total {
        return Err(invalid);
    }
    Ok(total)
}

/// The minefield. Cells are stored row-major and only mutated through
/// `Board` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    mine_count: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board with `mines` mines at uniformly random distinct positions.
    ///
    /// Every position goes into one list which is shuffled (Fisher-Yates) and
    /// the first `mines` entries are armed, so the count is always exact.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let total = validate_config(width, height, mines)?;
        let mut board = Self::blank(width, height);

        let mut positions: Vec<usize> = (0..total).collect();
        positions.shuffle(rng);
        for &index in positions.iter().take(mines) {
            board.cells[index].place_mine();
        }

        board.mine_count = mines;
        board.calculate_adjacent_counts();
        Ok(board)
    }

    /// Build a board with mines at exactly the given coordinates.
    ///
    /// Repeated coordinates count once.
    pub fn with_mines(width: usize, height: usize, mines: &[Coord]) -> Result<Self> {
        validate_config(width, height, 0)?;
        let mut board = Self::blank(width, height);

        for &(col, row) in mines {
            let index = board.index_of(col, row)?;
            board.cells[index].place_mine();
        }

        let placed = board.cells.iter().filter(|cell| cell.has_mine()).count();
        validate_config(width, height, placed)?;

        board.mine_count = placed;
        board.calculate_adjacent_counts();
        Ok(board)
    }

    fn blank(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(col, row));
            }
        }

        Self {
            width,
            height,
            mine_count: 0,
            cells,
        }
    }

    /// For each non-mine cell, count how many neighbours hold mines.
    fn calculate_adjacent_counts(&mut self) {
        for index in 0..self.cells.len() {
            if self.cells[index].has_mine() {
                continue;
            }

            let (col, row) = self.cells[index].coord();
            let count = self
                .neighbors_of(col, row)
                .into_iter()
                .filter(|&(n_col, n_row)| self.cells[n_row * self.width + n_col].has_mine())
                .count();

            self.cells[index].set_adjacent_mines(count as u8);
        }
    }

    fn index_of(&self, col: usize, row: usize) -> Result<usize> {
        if self.contains(col, row) {
            Ok(row * self.width + col)
        } else {
            Err(GameError::InvalidCoordinate { col, row })
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.index_of(col, row).ok().map(|index| &self.cells[index])
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn neighbors_of(&self, col: usize, row: usize) -> Vec<Coord> {
        neighbors(col, row, self.width, self.height)
    }

    pub fn flags_placed(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_flagged()).count()
    }

    pub fn revealed_safe_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_revealed() && !cell.has_mine())
            .count()
    }

    /// Mine coordinates in row-major order.
    pub fn mine_positions(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|cell| cell.has_mine())
            .map(Cell::coord)
            .collect()
    }

    /// Reveal a cell, flood-filling out from it if it has no adjacent mines.
    ///
    /// Flags do not stop the flood: only direct reveals of flagged cells are
    /// refused, and that check lives in the controller.
    pub fn reveal_at(&mut self, col: usize, row: usize) -> Result<RevealOutcome> {
        let index = self.index_of(col, row)?;

        if self.cells[index].is_revealed() {
            return Ok(RevealOutcome::Unchanged);
        }

        self.cells[index].reveal();

        if self.cells[index].has_mine() {
            return Ok(RevealOutcome::Detonated);
        }

        let mut opened = 1;
        if self.cells[index].adjacent_mines() == 0 {
            opened += self.flood_fill_from(col, row);
        }

        Ok(RevealOutcome::Revealed { cells: opened })
    }

    /// Open the zero region around `(col, row)` plus its numbered border.
    ///
    /// Worklist instead of recursion. A cell is pushed only at the moment it
    /// is revealed, so each cell is visited at most once.
    fn flood_fill_from(&mut self, start_col: usize, start_row: usize) -> usize {
        let mut opened = 0;
        let mut stack: Vec<Coord> = vec![(start_col, start_row)];

        while let Some((col, row)) = stack.pop() {
            for (n_col, n_row) in self.neighbors_of(col, row) {
                let index = n_row * self.width + n_col;
                let neighbor = &self.cells[index];

                if neighbor.is_revealed() || neighbor.has_mine() {
                    continue;
                }

                self.cells[index].reveal();
                opened += 1;

                if self.cells[index].adjacent_mines() == 0 {
                    stack.push((n_col, n_row));
                }
            }
        }

        opened
    }

    pub fn toggle_flag_at(&mut self, col: usize, row: usize) -> Result<FlagOutcome> {
        let index = self.index_of(col, row)?;
        let cell = &mut self.cells[index];
        let was_flagged = cell.is_flagged();

        Ok(if !cell.toggle_flag() {
            FlagOutcome::Unchanged
        } else if was_flagged {
            FlagOutcome::Unflagged
        } else {
            FlagOutcome::Flagged
        })
    }

    /// Reveal every mine, returning their coordinates in row-major order.
    pub fn reveal_all_mines(&mut self) -> Vec<Coord> {
        self.cells
            .iter_mut()
            .filter(|cell| cell.has_mine())
            .map(|cell| {
                cell.reveal();
                cell.coord()
            })
            .collect()
    }

    /// True when no safe cell is left unrevealed or flagged.
    ///
    /// Mines never need to be flagged or revealed. A flag sitting on a safe
    /// cell blocks the win even if that cell is open.
    pub fn is_won(&self) -> bool {
        !self
            .cells
            .iter()
            .any(|cell| !cell.has_mine() && (!cell.is_revealed() || cell.is_flagged()))
    }
}
