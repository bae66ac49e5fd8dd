//! Engine configuration.

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "tui-snake.log";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub cols: u16,
    pub rows: u16,
    /// Food RNG seed; `None` lets the binary pick one.
    pub seed: Option<u32>,
    /// Log file; `None` disables logging.
    pub log_path: Option<String>,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            seed: None,
            log_path: Some(DEFAULT_LOG_PATH.to_string()),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_COLS` / `SNAKE_ROWS`: grid size (positive integers)
    /// - `SNAKE_SEED`: food RNG seed
    /// - `SNAKE_LOG_PATH`: log file; set to an empty string to disable logging
    /// - `SNAKE_LOG_LEVEL`: log level filter
    ///
    /// Missing, zero or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let dim = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(default)
        };
        let cols = dim("SNAKE_COLS", defaults.cols);
        let rows = dim("SNAKE_ROWS", defaults.rows);

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = match lookup("SNAKE_LOG_PATH") {
            Some(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            None => defaults.log_path,
        };

        let log_level = lookup("SNAKE_LOG_LEVEL")
            .map(|s| s.trim().to_lowercase())
            .filter(|s| matches!(s.as_str(), "error" | "warn" | "info" | "debug" | "trace"))
            .unwrap_or(defaults.log_level);

        Self {
            cols,
            rows,
            seed,
            log_path,
            log_level,
        }
    }
}
