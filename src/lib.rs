//! 2Power (workspace facade crate).
//!
//! Re-exports the engine crates under `two_power::{core,input,types}` so the
//! shell and integration tests have one import root. The shell-only pieces
//! (environment config, the file-backed high-score store and the text
//! lines drawn around the board) live here too.

pub use two_power_core as core;
pub use two_power_input as input;
pub use two_power_types as types;

pub mod config;
pub mod store;
pub mod view;
