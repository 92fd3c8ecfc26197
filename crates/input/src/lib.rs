//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key events
//! into [`crate::types::GameAction`] values that the shell hands to the engine,
//! and recognises the quit keys.

pub mod map;

pub use two_power_types as types;

pub use map::{handle_key_event, should_quit};
