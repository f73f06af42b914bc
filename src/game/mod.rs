//! Minesweeper core: cells, the board and the game controller.
//!
//! No terminal or I/O code lives here. The presentation layer reads state
//! through shared references and feeds input back as [`GameCommand`]s.

pub mod board;
pub mod cell;
pub mod controller;
pub mod error;

pub use board::{neighbors, Board, FlagOutcome, RevealOutcome};
pub use cell::{Cell, Coord};
pub use controller::{Detonation, GameCommand, GameConfig, GameController, GameStatus};
pub use error::{GameError, Result};
