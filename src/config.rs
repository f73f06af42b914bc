//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::constants::DEFAULT_MINE_COUNT;
use crate::game::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "minesweeper", version, about = "Minesweeper in the terminal")]
pub struct Cli {
    /// Number of mines on the 27x18 board [default: 100]
    pub mines: Option<String>,

    /// Seed the mine layout generator for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log [default: platform data directory]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity: error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    /// Board configuration plus the warning to show if the mine count was unusable.
    pub fn game_config(&self) -> (GameConfig, Option<String>) {
        let total = GameConfig::default().total_cells();
        let (mines, warning) = parse_mine_count(self.mines.as_deref(), total);
        (GameConfig::standard(mines), warning)
    }
}

/// Resolve the positional mine-count argument.
///
/// Anything that is not a whole number in `0..total_cells` falls back to
/// [`DEFAULT_MINE_COUNT`] and produces a warning; the game always starts.
pub fn parse_mine_count(raw: Option<&str>, total_cells: usize) -> (usize, Option<String>) {
    let Some(raw) = raw else {
        return (DEFAULT_MINE_COUNT, None);
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 && (n as u64) < total_cells as u64 => (n as usize, None),
        Ok(n) => (
            DEFAULT_MINE_COUNT,
            Some(format!(
                "Mine count {} does not fit a {}-cell board. Using default value {}.",
                n, total_cells, DEFAULT_MINE_COUNT
            )),
        ),
        Err(_) => (
            DEFAULT_MINE_COUNT,
            Some(format!(
                "Invalid number of mines '{}'. Using default value {}.",
                raw, DEFAULT_MINE_COUNT
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_uses_default_silently() {
        assert_eq!(parse_mine_count(None, 486), (100, None));
    }

    #[test]
    fn test_valid_count() {
        assert_eq!(parse_mine_count(Some("1"), 486), (1, None));
        assert_eq!(parse_mine_count(Some(" 40 "), 486), (40, None));
        assert_eq!(parse_mine_count(Some("0"), 486), (0, None));
        assert_eq!(parse_mine_count(Some("485"), 486), (485, None));
    }

    #[test]
    fn test_non_numeric_falls_back_with_warning() {
        let (mines, warning) = parse_mine_count(Some("lots"), 486);
        assert_eq!(mines, 100);
        let warning = warning.unwrap();
        assert!(warning.contains("Invalid number of mines"), "{}", warning);
        assert!(warning.contains("lots"));
    }

    #[test]
    fn test_out_of_range_falls_back_with_warning() {
        for raw in ["486", "1000", "-3"] {
            let (mines, warning) = parse_mine_count(Some(raw), 486);
            assert_eq!(mines, 100, "input {}", raw);
            assert!(warning.is_some(), "input {}", raw);
        }
    }

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::try_parse_from(["minesweeper", "25", "--seed", "9", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.mines.as_deref(), Some("25"));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.log_level, Level::DEBUG);

        let (config, warning) = cli.game_config();
        assert_eq!(config, GameConfig::standard(25));
        assert!(warning.is_none());
    }

    #[test]
    fn test_cli_accepts_non_numeric_mines() {
        let cli = Cli::try_parse_from(["minesweeper", "abc"]).unwrap();
        let (config, warning) = cli.game_config();
        assert_eq!(config.mines, 100);
        assert!(warning.is_some());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["minesweeper"]).unwrap();
        assert_eq!(cli.mines, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.log_level, Level::INFO);
    }
}
