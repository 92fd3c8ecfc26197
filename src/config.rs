//! Shell configuration from environment variables.
//!
//! - `TWO_POWER_HIGH_SCORE_PATH`: best-score file (default: ".two-power-best.json")
//! - `TWO_POWER_SEED`: fixed RNG seed for a replayable session
//! - `TWO_POWER_INITIAL_TILES`: "weighted" (default) or "two-or-four"
//! - `TWO_POWER_LOG_PATH`: write logs to this file (logging is off otherwise)

use std::path::PathBuf;

use crate::core::InitialTiles;

pub const DEFAULT_HIGH_SCORE_PATH: &str = ".two-power-best.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub high_score_path: PathBuf,
    pub seed: Option<u64>,
    pub initial_tiles: InitialTiles,
    pub log_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            seed: None,
            initial_tiles: InitialTiles::default(),
            log_path: None,
        }
    }
}

impl ShellConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let high_score_path = non_empty("TWO_POWER_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGH_SCORE_PATH));

        let seed = non_empty("TWO_POWER_SEED").and_then(|s| s.parse().ok());

        let initial_tiles = non_empty("TWO_POWER_INITIAL_TILES")
            .and_then(|s| InitialTiles::from_str(&s))
            .unwrap_or_default();

        let log_path = non_empty("TWO_POWER_LOG_PATH").map(PathBuf::from);

        Self {
            high_score_path,
            seed,
            initial_tiles,
            log_path,
        }
    }
}
