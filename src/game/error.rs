use thiserror::Error;

/// Errors raised by board construction and coordinate lookups.
///
/// Neither is ever shown to the player: a rejected configuration aborts only
/// the `new_game` call that produced it, and an out-of-board coordinate is
/// dropped by the controller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board configuration: {width}x{height} with {mines} mines")]
    InvalidConfiguration {
        width: usize,
        height: usize,
        mines: usize,
    },
    #[error("coordinate ({col}, {row}) is outside the board")]
    InvalidCoordinate { col: usize, row: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
