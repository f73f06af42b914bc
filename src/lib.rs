//! Minesweeper - terminal rendition of the classic mine-clearing game
//!
//! The `game` module holds the rules and has no terminal dependencies; the
//! rest adapts it to crossterm input and a ratatui screen.

pub mod app;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use game::{
    Board, Cell, Coord, Detonation, GameCommand, GameConfig, GameController, GameError,
    GameStatus,
};
