//! Game lifecycle: new game, input dispatch, timing, win/loss and reset.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::board::{Board, FlagOutcome, RevealOutcome};
use super::cell::Coord;
use super::error::{GameError, Result};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_MINE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Board dimensions and mine count for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, mines: usize) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// The fixed 27x18 board with the given mine count.
    pub fn standard(mines: usize) -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, mines)
    }

    pub fn total_cells(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard(DEFAULT_MINE_COUNT)
    }
}

/// A mine to animate after a loss. `order` is its position in the
/// row-major disclosure sequence, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detonation {
    pub coord: Coord,
    pub order: usize,
}

/// Player intent, already translated into board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Reveal { col: usize, row: usize },
    ToggleFlag { col: usize, row: usize },
    Restart,
}

/// Owns the board for one session and drives it through
/// `Playing -> {Won, Lost}`, with `reset` available from any state.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    config: GameConfig,
    status: GameStatus,
    /// Time accumulated from frame ticks while playing.
    elapsed: Duration,
    /// Captured once when the game leaves `Playing`.
    elapsed_at_end: Option<Duration>,
    detonations: Vec<Detonation>,
    triggered_mine: Option<Coord>,
    /// Bumped on every new game so observers can spot a reset.
    game_number: u64,
    rng: StdRng,
}

impl GameController {
    /// Start a session with an entropy-seeded layout generator.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a session whose layouts come from a seeded generator.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let board = Board::new(config.width, config.height, config.mines, &mut rng)?;
        info!(
            width = config.width,
            height = config.height,
            mines = config.mines,
            "new game"
        );
        Ok(Self::assemble(board, config, rng))
    }

    /// Start a session on a prepared board. Later resets draw random
    /// layouts with the same dimensions and mine count.
    pub fn from_board(board: Board) -> Self {
        let config = GameConfig::new(board.width(), board.height(), board.mine_count());
        Self::assemble(board, config, StdRng::from_entropy())
    }

    fn assemble(board: Board, config: GameConfig, rng: StdRng) -> Self {
        Self {
            board,
            config,
            status: GameStatus::Playing,
            elapsed: Duration::ZERO,
            elapsed_at_end: None,
            detonations: Vec::new(),
            triggered_mine: None,
            game_number: 1,
            rng,
        }
    }

    /// Replace the board with a fresh layout and restart the clock.
    ///
    /// The new board is built before anything is touched, so a rejected
    /// configuration leaves the current game as it was.
    pub fn new_game(&mut self, config: GameConfig) -> Result<()> {
        let board = Board::new(config.width, config.height, config.mines, &mut self.rng)
            .map_err(|err| {
                warn!(%err, "rejected new game");
                err
            })?;

        self.board = board;
        self.config = config;
        self.status = GameStatus::Playing;
        self.elapsed = Duration::ZERO;
        self.elapsed_at_end = None;
        self.detonations.clear();
        self.triggered_mine = None;
        self.game_number += 1;

        info!(
            width = config.width,
            height = config.height,
            mines = config.mines,
            game = self.game_number,
            "new game"
        );
        Ok(())
    }

    /// Start over with the last-used configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.new_game(self.config)
    }

    /// Reveal the cell under a primary press. Returns true if anything changed.
    ///
    /// Ignored once the game is over and on flagged cells.
    pub fn on_primary_input(&mut self, col: usize, row: usize) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        match self.board.cell(col, row) {
            None => {
                debug!(
                    err = %GameError::InvalidCoordinate { col, row },
                    "ignoring primary input"
                );
                return false;
            }
            Some(cell) if cell.is_flagged() => return false,
            Some(_) => {}
        }

        match self.board.reveal_at(col, row) {
            Ok(RevealOutcome::Unchanged) => false,
            Ok(RevealOutcome::Detonated) => {
                self.lose(col, row);
                true
            }
            Ok(RevealOutcome::Revealed { cells }) => {
                debug!(col, row, cells, "revealed");
                self.check_win();
                true
            }
            Err(err) => {
                debug!(%err, "ignoring primary input");
                false
            }
        }
    }

    /// Toggle the flag under a secondary press. Returns true if anything changed.
    pub fn on_secondary_input(&mut self, col: usize, row: usize) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        match self.board.toggle_flag_at(col, row) {
            Ok(FlagOutcome::Unchanged) => false,
            Ok(outcome) => {
                debug!(col, row, ?outcome, "flag toggled");
                // Clearing a stale flag off an opened cell can finish the board
                self.check_win();
                true
            }
            Err(err) => {
                debug!(%err, "ignoring secondary input");
                false
            }
        }
    }

    pub fn handle(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Reveal { col, row } => self.on_primary_input(col, row),
            GameCommand::ToggleFlag { col, row } => self.on_secondary_input(col, row),
            GameCommand::Restart => self.reset().is_ok(),
        }
    }

    /// Advance the clock by one frame. Does nothing once the game is over.
    pub fn tick(&mut self, delta: Duration) {
        if self.status == GameStatus::Playing {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    fn lose(&mut self, col: usize, row: usize) {
        self.finish(GameStatus::Lost);
        self.triggered_mine = Some((col, row));
        self.detonations = self
            .board
            .reveal_all_mines()
            .into_iter()
            .enumerate()
            .map(|(order, coord)| Detonation { coord, order })
            .collect();

        info!(
            col,
            row,
            mines = self.detonations.len(),
            opened = self.board.revealed_safe_cells(),
            seconds = self.elapsed_seconds(),
            "mine detonated, game lost"
        );
    }

    fn check_win(&mut self) {
        if self.board.is_won() {
            self.finish(GameStatus::Won);
            info!(
                opened = self.board.revealed_safe_cells(),
                seconds = self.elapsed_seconds(),
                "board cleared, game won"
            );
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.elapsed_at_end = Some(self.elapsed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Live while playing, frozen once won or lost.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at_end.unwrap_or(self.elapsed)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Mines in disclosure order. Empty unless the game was lost.
    pub fn detonations(&self) -> &[Detonation] {
        &self.detonations
    }

    pub fn triggered_mine(&self) -> Option<Coord> {
        self.triggered_mine
    }

    pub fn game_number(&self) -> u64 {
        self.game_number
    }

    /// Mines minus flags. Negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        self.board.mine_count() as isize - self.board.flags_placed() as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(width: usize, height: usize, mines: &[Coord]) -> GameController {
        GameController::from_board(Board::with_mines(width, height, mines).unwrap())
    }

    #[test]
    fn test_new_game_starts_playing() {
        let game = GameController::with_seed(GameConfig::default(), 42).unwrap();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board().width(), BOARD_WIDTH);
        assert_eq!(game.board().height(), BOARD_HEIGHT);
        assert_eq!(game.board().mine_count(), DEFAULT_MINE_COUNT);
        assert_eq!(game.elapsed_seconds(), 0);
        assert!(game.detonations().is_empty());
        assert_eq!(game.mines_remaining(), 100);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(GameController::new(GameConfig::new(3, 3, 9)).is_err());
        assert!(GameController::new(GameConfig::new(0, 3, 0)).is_err());
    }

    #[test]
    fn test_rejected_new_game_keeps_previous_state() {
        let mut game = controller(3, 3, &[(2, 2)]);
        game.on_secondary_input(0, 2);
        game.tick(Duration::from_secs(4));
        let before = game.board().clone();

        let result = game.new_game(GameConfig::new(2, 2, 4));

        assert!(matches!(
            result,
            Err(GameError::InvalidConfiguration { mines: 4, .. })
        ));
        assert_eq!(game.board(), &before);
        assert_eq!(game.config(), GameConfig::new(3, 3, 1));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.elapsed_seconds(), 4);
        assert_eq!(game.game_number(), 1);
    }

    #[test]
    fn test_flood_reveal_wins_three_by_three() {
        let mut game = controller(3, 3, &[(2, 2)]);

        assert!(game.on_primary_input(0, 0));

        let revealed = game.board().cells().filter(|c| c.is_revealed()).count();
        assert_eq!(revealed, 8);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.detonations().is_empty());
    }

    #[test]
    fn test_flagged_cell_cannot_be_revealed() {
        let mut game = controller(3, 3, &[(2, 2)]);

        assert!(game.on_secondary_input(1, 1));
        assert!(!game.on_primary_input(1, 1));

        let cell = game.board().cell(1, 1).unwrap();
        assert!(cell.is_flagged());
        assert!(!cell.is_revealed());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_hitting_mine_loses_and_discloses_all_mines() {
        let mut game = controller(4, 4, &[(3, 3), (0, 3), (2, 0)]);
        game.tick(Duration::from_millis(2500));

        assert!(game.on_primary_input(0, 3));

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 3)));
        assert_eq!(
            game.detonations(),
            &[
                Detonation {
                    coord: (2, 0),
                    order: 0
                },
                Detonation {
                    coord: (0, 3),
                    order: 1
                },
                Detonation {
                    coord: (3, 3),
                    order: 2
                },
            ]
        );
        assert!(game
            .board()
            .cells()
            .filter(|c| c.has_mine())
            .all(|c| c.is_revealed()));
    }

    #[test]
    fn test_elapsed_freezes_on_loss() {
        let mut game = controller(3, 3, &[(0, 0)]);
        game.tick(Duration::from_secs(7));
        game.on_primary_input(0, 0);

        game.tick(Duration::from_secs(30));
        assert_eq!(game.elapsed_seconds(), 7);
    }

    #[test]
    fn test_elapsed_freezes_on_win() {
        let mut game = controller(2, 1, &[(0, 0)]);
        game.tick(Duration::from_millis(1999));
        game.on_primary_input(1, 0);

        assert_eq!(game.status(), GameStatus::Won);
        game.tick(Duration::from_secs(5));
        assert_eq!(game.elapsed_seconds(), 1);
        assert_eq!(game.elapsed(), Duration::from_millis(1999));
    }

    #[test]
    fn test_input_ignored_after_loss() {
        let mut game = controller(3, 3, &[(0, 0)]);
        game.on_primary_input(0, 0);
        let after_loss = game.board().clone();

        assert!(!game.on_primary_input(2, 2));
        assert!(!game.on_secondary_input(1, 1));
        assert_eq!(game.board(), &after_loss);
    }

    #[test]
    fn test_input_ignored_after_win() {
        let mut game = controller(2, 1, &[(0, 0)]);
        game.on_primary_input(1, 0);
        assert_eq!(game.status(), GameStatus::Won);

        assert!(!game.on_secondary_input(0, 0));
        assert!(!game.on_primary_input(0, 0));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_out_of_bounds_input_ignored() {
        let mut game = controller(3, 3, &[(0, 0)]);
        assert!(!game.on_primary_input(3, 0));
        assert!(!game.on_secondary_input(0, 99));
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_reveal_twice_changes_nothing() {
        let mut game = controller(3, 3, &[(0, 0)]);
        assert!(game.on_primary_input(1, 1));
        let once = game.board().clone();

        assert!(!game.on_primary_input(1, 1));
        assert_eq!(game.board(), &once);
    }

    #[test]
    fn test_clearing_stale_flag_completes_win() {
        let mut game = controller(3, 3, &[(2, 2)]);
        game.on_secondary_input(0, 2);

        game.on_primary_input(0, 0);
        assert_eq!(game.status(), GameStatus::Playing);

        assert!(game.on_secondary_input(0, 2));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_reset_after_loss() {
        let mut game = controller(27, 18, &[(0, 0)]);
        game.tick(Duration::from_secs(12));
        game.on_primary_input(0, 0);
        assert_eq!(game.status(), GameStatus::Lost);

        game.reset().unwrap();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.elapsed_seconds(), 0);
        assert_eq!(game.game_number(), 2);
        assert!(game.detonations().is_empty());
        assert_eq!(game.triggered_mine(), None);
        assert_eq!(game.board().mine_count(), 1);
        assert!(game.board().cells().all(|c| !c.is_revealed()));
    }

    #[test]
    fn test_handle_dispatches_commands() {
        let mut game = controller(3, 3, &[(2, 2)]);

        assert!(game.handle(GameCommand::ToggleFlag { col: 1, row: 1 }));
        assert!(game.board().cell(1, 1).unwrap().is_flagged());

        assert!(game.handle(GameCommand::Reveal { col: 0, row: 0 }));
        assert!(game.board().cell(0, 0).unwrap().is_revealed());

        assert!(game.handle(GameCommand::Restart));
        assert_eq!(game.game_number(), 2);
    }

    #[test]
    fn test_mines_remaining_can_go_negative() {
        let mut game = controller(3, 3, &[(0, 0)]);
        game.on_secondary_input(1, 1);
        game.on_secondary_input(2, 2);
        assert_eq!(game.mines_remaining(), -1);
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let mut a = GameController::with_seed(GameConfig::default(), 5).unwrap();
        let mut b = GameController::with_seed(GameConfig::default(), 5).unwrap();
        assert_eq!(a.board().mine_positions(), b.board().mine_positions());

        a.reset().unwrap();
        b.reset().unwrap();
        assert_eq!(a.board().mine_positions(), b.board().mine_positions());
    }
}
