//! File-backed high-score store.
//!
//! The best score is kept as a small JSON document:
//!
//! ```text
//! {"highest_score":"2048"}
//! ```
//!
//! Read and write failures are logged and otherwise ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::HighScoreStore;

#[derive(Debug, Serialize, Deserialize)]
struct StoredHighScore {
    highest_score: String,
}

#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let stored: StoredHighScore = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(stored.highest_score))
    }

    fn write(&self, value: String) -> Result<()> {
        let text = serde_json::to_string(&StoredHighScore {
            highest_score: value,
        })?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn get(&self) -> Option<String> {
        match self.read() {
            Ok(value) => value,
            Err(err) => {
                warn!("high score unavailable: {:#}", err);
                None
            }
        }
    }

    fn set(&mut self, value: String) {
        if let Err(err) = self.write(value) {
            warn!("high score not saved: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("two-power-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let store = FileHighScoreStore::new(temp_path("missing"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_then_get() {
        let path = temp_path("roundtrip");
        let mut store = FileHighScoreStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        store.set("1024".to_string());
        assert_eq!(store.get().as_deref(), Some("1024"));

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"highest_score":"1024"}"#);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_reads_as_none() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = FileHighScoreStore::new(&path);
        assert_eq!(store.get(), None);
        let _ = fs::remove_file(&path);
    }
}
