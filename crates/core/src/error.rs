//! Engine errors.

use std::fmt;

/// Errors surfaced by the rules engine.
///
/// Normal play never produces one: boards built by the engine always satisfy
/// their invariants. Hosts that assemble boards by hand get an error instead of
/// a silently corrupted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A board or cell broke a structural invariant
    InvariantViolation(String),
}

impl EngineError {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        EngineError::InvariantViolation(msg.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvariantViolation(msg) => write!(f, "Board invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
