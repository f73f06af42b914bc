//! File-backed tracing setup.
//!
//! The terminal belongs to the game screen, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::Level;

use crate::constants::LOG_FILE_NAME;

/// Log file location in the platform's local data directory.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "minesweeper").map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path` or the default location.
///
/// Returns the file being written.
pub fn init(path: Option<&Path>, level: Level) -> io::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine data directory",
            )
        })?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
