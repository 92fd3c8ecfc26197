//! High score tracking against a host-provided store.
//!
//! The store holds a single string value. A missing value is initialised to
//! `"0"` on load; the stored value is rewritten only when a score beats it.

use log::warn;

/// Persistence collaborator for the best score.
pub trait HighScoreStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: String);
}

/// In-process store, useful for tests and hosts without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    value: Option<String>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: String) {
        self.value = Some(value);
    }
}

/// Best score seen so far, mirrored into a [`HighScoreStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Read the best score from `store`, writing `"0"` when it has none.
    ///
    /// A value that does not parse as a score counts as 0.
    pub fn load<S: HighScoreStore + ?Sized>(store: &mut S) -> Self {
        let best = match store.get() {
            None => {
                store.set("0".to_string());
                0
            }
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(best) => best,
                Err(_) => {
                    warn!("ignoring unparsable high score {:?}", raw);
                    0
                }
            },
        };
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record `score`; returns true when it set a new best.
    pub fn record<S: HighScoreStore + ?Sized>(&mut self, score: u32, store: &mut S) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.set(score.to_string());
        true
    }
}
